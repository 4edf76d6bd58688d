use proptest::prelude::*;
use resenha_core::config::TopicConfig;
use resenha_core::constants::TOPIC_WEIGHT_TOLERANCE;
use resenha_topics::TopicModelBuilder;

fn word() -> impl Strategy<Value = String> {
    // Small alphabet so documents share vocabulary.
    prop::sample::select(vec![
        "trava", "erro", "bug", "lento", "demora", "senha", "login", "tela", "menu", "conexão",
    ])
    .prop_map(str::to_string)
}

fn corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(proptest::collection::vec(word(), 1..12), 4..20)
}

fn config(k: usize, seed: u64) -> TopicConfig {
    TopicConfig {
        topic_count: k,
        min_doc_freq: 1,
        seed,
        max_retries: 0,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn doc_weights_stay_on_simplex(docs in corpus(), k in 2usize..5, seed in 0u64..1000) {
        let ids: Vec<String> = (0..docs.len()).map(|i| format!("r{i}")).collect();
        let builder = TopicModelBuilder::new(&config(k, seed));
        if let Ok(model) = builder.fit(&ids, &docs) {
            for dw in &model.doc_weights {
                let sum: f64 = dw.weights.iter().sum();
                prop_assert!((sum - 1.0).abs() < TOPIC_WEIGHT_TOLERANCE);
                prop_assert_eq!(dw.weights.len(), model.topic_count);
            }
        }
    }

    #[test]
    fn same_seed_same_model(docs in corpus(), seed in 0u64..1000) {
        let ids: Vec<String> = (0..docs.len()).map(|i| format!("r{i}")).collect();
        let builder = TopicModelBuilder::new(&config(3, seed));
        let a = builder.fit(&ids, &docs);
        let b = builder.fit(&ids, &docs);
        match (a, b) {
            (Ok(ma), Ok(mb)) => {
                prop_assert_eq!(ma.seed, mb.seed);
                for (ta, tb) in ma.topics.iter().zip(mb.topics.iter()) {
                    let wa: Vec<&str> = ta.top_keywords.iter().map(|k| k.word.as_str()).collect();
                    let wb: Vec<&str> = tb.top_keywords.iter().map(|k| k.word.as_str()).collect();
                    prop_assert_eq!(wa, wb);
                }
                for (da, db) in ma.doc_weights.iter().zip(mb.doc_weights.iter()) {
                    prop_assert_eq!(&da.weights, &db.weights);
                }
            }
            (Err(ea), Err(eb)) => prop_assert_eq!(ea.to_string(), eb.to_string()),
            _ => prop_assert!(false, "one fit succeeded, the other failed"),
        }
    }
}
