/// Behavioural tests for the quote engine

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tutor_core::pricing::table::FallbackRate;
    use tutor_core::pricing::{DiscountKind, DiscountTable, Hours, LanguageRates, Level, PriceTable};
    use tutor_core::{PricingEngine, Quote};

    /// (language, beginner, intermediate, advanced) as published on the site.
    const RATE_CARD: [(&str, u32, u32, u32); 10] = [
        ("python", 6000, 7500, 9000),
        ("javascript", 6500, 8000, 9500),
        ("java", 7000, 8500, 10000),
        ("csharp", 7000, 8500, 10000),
        ("web", 6000, 7500, 9000),
        ("sql", 6000, 7500, 9000),
        ("logica", 5500, 7000, 8500),
        ("cpp", 6500, 8000, 9500),
        ("php", 6000, 7500, 9000),
        ("swift", 7000, 8500, 10000),
    ];

    const TIERS: [(u32, f64); 5] = [(4, 0.05), (6, 0.10), (8, 0.15), (10, 0.20), (12, 0.25)];

    fn js_round(x: f64) -> u64 {
        (x + 0.5).floor() as u64
    }

    #[test]
    fn test_every_rate_matches_card() {
        let engine = PricingEngine::default();
        for (language, beginner, intermediate, advanced) in RATE_CARD {
            for (level, expected) in [
                (Level::Beginner, beginner),
                (Level::Intermediate, intermediate),
                (Level::Advanced, advanced),
            ] {
                let quote = engine.calculate_price(language, level.as_str(), 1);
                assert_eq!(quote.base_price, expected, "{} {}", language, level);
                assert_eq!(quote.total, u64::from(expected));
            }
        }
    }

    #[test]
    fn test_every_tier_discounts_exactly() {
        let engine = PricingEngine::default();
        for (hours, rate) in TIERS {
            let quote = engine.calculate_price("python", "beginner", hours);
            assert_eq!(quote.discounts.len(), 1);
            let line = &quote.discounts[0];
            assert_eq!(line.kind, DiscountKind::Package);
            assert!((line.percentage - rate * 100.0).abs() < 1e-9);
            assert!((line.amount - quote.subtotal * rate).abs() < 1e-6);
            assert_eq!(quote.total, js_round(quote.subtotal - quote.total_discount));
        }
    }

    #[test]
    fn test_between_tiers_no_discount() {
        let engine = PricingEngine::default();
        for hours in [1u32, 2, 3, 5, 7, 9, 11, 13, 24] {
            let quote = engine.calculate_price("python", "beginner", hours);
            assert!(quote.discounts.is_empty(), "{} hours", hours);
            assert_eq!(quote.total_discount, 0.0);
        }
    }

    #[test]
    fn test_four_hours_is_five_percent() {
        let quote = PricingEngine::default().calculate_price("python", "beginner", 4);
        assert_eq!(quote.subtotal, 24000.0);
        assert!((quote.total_discount - 1200.0).abs() < 1e-6);
        assert_eq!(quote.total, 22800);
        assert_eq!(quote.price_per_hour, 5700);
    }

    #[test]
    fn test_cobol_falls_back_to_python_beginner() {
        let quote = PricingEngine::default().calculate_price("cobol", "beginner", 1);
        assert_eq!(quote.base_price, 6000);
        assert_eq!(quote.language, "cobol");
    }

    #[test]
    fn test_flat_discounts_never_applied() {
        let engine = PricingEngine::default();
        let flat = engine.discounts().flat();
        assert_eq!((flat.students, flat.referrals, flat.group), (0.15, 0.10, 0.25));

        let quote = engine.calculate_price("java", "beginner", 2);
        assert!(quote.discounts.is_empty());
        assert_eq!(quote.total, 14000);
    }

    #[test]
    fn test_json_shape() {
        let quote = PricingEngine::default().calculate_price("java", "advanced", 12);
        let value = serde_json::to_value(&quote).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "basePrice",
                "description",
                "discounts",
                "hours",
                "language",
                "level",
                "pricePerHour",
                "subtotal",
                "total",
                "totalDiscount",
            ]
        );
        assert_eq!(value["discounts"][0]["type"], "package");
        assert_eq!(value["total"], 90000);

        let back: Quote = serde_json::from_value(value).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn test_huge_hours_keep_total_exact() {
        let quote = PricingEngine::default().calculate_price("python", "beginner", 1.0e16);
        assert_eq!(quote.hours, Hours::MAX_HOURS);
        assert_eq!(quote.total, js_round(quote.subtotal - quote.total_discount));
        assert_eq!(quote.price_per_hour, 6000);

        // The most expensive rate a table can hold still fits a JS safe integer.
        let mut languages = HashMap::new();
        languages.insert("python".to_string(), LanguageRates::new(u32::MAX, u32::MAX, u32::MAX, "max"));
        let engine = PricingEngine::new(PriceTable::new(languages, FallbackRate::default()), DiscountTable::builtin());
        let quote = engine.calculate_price("python", "advanced", f64::MAX);
        assert_eq!(quote.total as f64, quote.subtotal);
        assert!(quote.total < 1u64 << 53);
        assert_eq!(quote.price_per_hour, u64::from(u32::MAX));
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let engine = Arc::new(PricingEngine::default());
        let expected = engine.calculate_price("javascript", "intermediate", 6);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let engine = Arc::clone(&engine);
                    scope.spawn(move || {
                        let mut quotes = Vec::new();
                        for n in 0..200u32 {
                            // Interleave unrelated requests between the ones we compare.
                            engine.calculate_price("cobol", "guru", n + i);
                            quotes.push(engine.calculate_price("javascript", "intermediate", 6));
                        }
                        quotes
                    })
                })
                .collect();

            for handle in handles {
                for quote in handle.join().unwrap() {
                    assert_eq!(quote, expected);
                }
            }
        });
    }

    fn language() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(RATE_CARD.iter().map(|r| r.0.to_string()).collect::<Vec<_>>()),
            "[a-z]{1,10}",
        ]
    }

    fn level() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("beginner".to_string()),
            Just("intermediate".to_string()),
            Just("advanced".to_string()),
            "[a-zA-Z]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_hours_below_one_act_as_one(
            language in language(),
            level in level(),
            hours in prop_oneof![-1.0e6f64..1.0, Just(f64::NAN), Just(f64::NEG_INFINITY), Just(f64::INFINITY)],
        ) {
            let engine = PricingEngine::default();
            prop_assert_eq!(
                engine.calculate_price(&language, &level, hours),
                engine.calculate_price(&language, &level, 1)
            );
        }

        #[test]
        fn prop_non_numeric_text_acts_as_one(text in "[a-zA-Z ]{0,12}") {
            prop_assert_eq!(Hours::from(text.as_str()), Hours::ONE);
        }

        #[test]
        fn prop_quote_arithmetic(language in language(), level in level(), hours in 1u32..500) {
            let quote = PricingEngine::default().calculate_price(&language, &level, hours);
            prop_assert_eq!(quote.hours, f64::from(hours));
            prop_assert_eq!(quote.subtotal, f64::from(quote.base_price) * f64::from(hours));
            prop_assert_eq!(quote.total, js_round(quote.subtotal - quote.total_discount));
            prop_assert_eq!(quote.price_per_hour, js_round(quote.total as f64 / f64::from(hours)));
            prop_assert!(quote.total as f64 <= quote.subtotal);
            prop_assert!(quote.discounts.len() <= 1);
            let tiered = TIERS.iter().any(|(h, _)| *h == hours);
            prop_assert_eq!(quote.has_discount(), tiered);
        }

        #[test]
        fn prop_fractional_hours_never_discounted(whole in 1u32..20, frac in 0.01f64..0.99) {
            let hours = f64::from(whole) + frac;
            let quote = PricingEngine::default().calculate_price("python", "beginner", hours);
            prop_assert!(quote.discounts.is_empty());
            prop_assert_eq!(quote.hours, hours);
        }

        #[test]
        fn prop_calculation_is_idempotent(language in language(), level in level(), hours in 0u32..50) {
            let engine = PricingEngine::default();
            let first = serde_json::to_string(&engine.calculate_price(&language, &level, hours)).unwrap();
            let second = serde_json::to_string(&engine.calculate_price(&language, &level, hours)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_unknown_language_uses_fallback(language in "[a-z]{1,10}", hours in 1u32..20) {
            prop_assume!(!RATE_CARD.iter().any(|r| r.0 == language));
            let quote = PricingEngine::default().calculate_price(&language, "advanced", hours);
            prop_assert_eq!(quote.base_price, 6000);
            prop_assert_eq!(quote.description, "Lógica, POO, APIs, Django/Flask, Data Science");
        }
    }
}
