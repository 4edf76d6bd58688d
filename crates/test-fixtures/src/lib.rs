//! Shared corpus builders for integration tests. Dates are fixed so
//! fixtures are fully deterministic.

use chrono::{TimeZone, Utc};
use resenha_core::models::{Corpus, Review, UserHash};

/// A review with a fixed date and an anonymized user derived from the
/// id.
pub fn review(review_id: &str, text: &str) -> Review {
    review_with(review_id, "br.gov.saude.app", text, Some(3))
}

pub fn review_with(review_id: &str, app_id: &str, text: &str, rating: Option<u8>) -> Review {
    Review {
        review_id: review_id.to_string(),
        app_id: app_id.to_string(),
        text: text.to_string(),
        rating,
        date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        user_hash: UserHash::anonymize(review_id),
    }
}

/// A corpus with ids r01, r02, ... in input order.
pub fn corpus_from(texts: &[&str]) -> Corpus {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| review(&format!("r{:02}", i + 1), text))
        .collect()
}

/// A small realistic Portuguese review corpus covering all three
/// sentiment labels and several thematic axes.
pub fn sample_corpus() -> Corpus {
    corpus_from(&[
        "Aplicativo trava direto, muito lento",
        "Excelente app, recomendo muito, fácil de usar",
        "Não consigo fazer login, erro de senha toda hora",
        "O cadastro não sincroniza com o servidor, perdi dados",
        "Gostei da interface, mas a tela de menu é confusa",
        "Péssimo, fecha sozinho e consome toda a bateria",
        "Funciona bem para agendar consulta",
        "Demora demais para carregar, internet boa e mesmo assim lento",
        "Ótimo para acompanhar vacinação",
        "Preocupado com privacidade, pede permissão demais",
    ])
}
