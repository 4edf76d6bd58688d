//! Embedded Portuguese stopword list.
//!
//! Standard function words plus the study's extra review-domain terms
//! ("app", "aplicativo", ...). Negations ("não", "nao", "nem") are
//! deliberately absent: phrase keywords and the polarity lexicon need
//! to see them.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Standard Portuguese function words.
const BASE: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
    "esses", "esta", "está", "estamos", "estão", "estas", "estava", "estavam", "este", "esteja",
    "estes", "estou", "eu", "foi", "fomos", "for", "foram", "fosse", "fui", "há", "isso", "isto",
    "já", "lhe", "lhes", "mas", "me", "mesmo", "meu", "meus", "minha", "minhas", "na", "nas",
    "no", "nos", "nós", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou",
    "para", "pela", "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "se", "seja",
    "sem", "ser", "será", "seu", "seus", "só", "sou", "sua", "suas", "também", "te", "tem", "tém",
    "temos", "tenho", "ter", "teu", "teus", "tu", "tua", "tuas", "um", "uma", "você", "vocês",
    "vos",
];

/// Review-domain extras carried over from the study configuration.
const EXTRAS: &[&str] = &[
    "app", "aplicativo", "aplicação", "aplicacao", "muito", "mais", "ainda", "aqui", "lá", "la",
    "pra", "pro", "tá", "ta", "tô", "to", "ai", "aí", "né", "ne", "gente", "coisa", "coisas",
    "vez", "vezes", "dia", "dias", "pode", "vai", "vou", "fazer",
];

static ALL: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASE.iter().chain(EXTRAS.iter()).copied().collect());

/// Whether `word` is on the embedded stopword list.
pub fn is_stopword(word: &str) -> bool {
    ALL.contains(word)
}

/// The embedded list as an iterator, for vocabulary tooling and tests.
pub fn all() -> impl Iterator<Item = &'static str> {
    BASE.iter().chain(EXTRAS.iter()).copied()
}
