use serde::{Deserialize, Serialize};

/// Construction options for [`DigestingReader`](crate::DigestingReader).
///
/// The default algorithms are always registered first; `algorithms` lists
/// extra names registered after them, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub algorithms: Vec<String>,
}

impl ReaderOptions {
    pub fn new() -> Self { Self::default() }

    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithms.push(name.into());
        self
    }

    pub fn algorithms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.algorithms.extend(names.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ReaderOptions::new().algorithm("SHA-256").algorithms(["SHA-512"]);
        assert_eq!(options.algorithms, vec!["SHA-256", "SHA-512"]);
    }

    #[test]
    fn test_deserialize() {
        let options: ReaderOptions =
            serde_json::from_str(r#"{ "algorithms": ["SHA-256"] }"#).unwrap();
        assert_eq!(options, ReaderOptions::new().algorithm("SHA-256"));

        let empty: ReaderOptions = serde_json::from_str("{}").unwrap();
        assert!(empty.algorithms.is_empty());
    }
}
