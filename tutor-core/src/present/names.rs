/// Spanish display name for a language key. Unknown keys display as given.
pub fn language_name(key: &str) -> &str {
    match key {
        "python" => "Python",
        "javascript" => "JavaScript",
        "java" => "Java",
        "csharp" => "C# .NET",
        "web" => "Desarrollo Web",
        "sql" => "SQL y Bases de Datos",
        "logica" => "Lógica de Programación",
        "cpp" => "C++",
        "php" => "PHP",
        "swift" => "Swift",
        other => other,
    }
}

pub fn level_name(key: &str) -> &str {
    match key {
        "beginner" => "Principiante",
        "intermediate" => "Intermedio",
        "advanced" => "Avanzado",
        other => other,
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}
