use serde::{Deserialize, Serialize};

/// Index reserved for the virtual root every sentence hangs from.
pub const ROOT: usize = 0;

/// One parsed word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// 1-based position in the sentence.
    pub idx: usize,
    /// Surface form.
    pub form: String,
    pub lemma: String,
    pub pos: String,
    pub feats: String,
    /// Governing token, or [`ROOT`].
    pub head: usize,
    /// Relation to the head, as labelled by the parser.
    pub rel: String,
    /// Salience, attached by `TfIdfIndex::annotate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<f64>,
}

impl Token {
    pub fn new(
        idx: usize,
        form: impl Into<String>,
        lemma: impl Into<String>,
        head: usize,
        rel: impl Into<String>,
    ) -> Self {
        Self {
            idx,
            form: form.into(),
            lemma: lemma.into(),
            pos: "_".to_string(),
            feats: "_".to_string(),
            head,
            rel: rel.into(),
            tfidf: None,
        }
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    pub fn with_tfidf(mut self, score: f64) -> Self {
        self.tfidf = Some(score);
        self
    }
}

/// An ordered run of tokens sharing one dependency tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn first_form(&self) -> Option<&str> {
        self.tokens.first().map(|t| t.form.as_str())
    }

    /// Space-joined surface forms in input order.
    pub fn surface(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_annotated(&self) -> bool {
        self.tokens.iter().all(|t| t.tfidf.is_some())
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
