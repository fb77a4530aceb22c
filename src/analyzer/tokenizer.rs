use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\p{L}\p{N}_]+)(['’]\p{L}+)?").unwrap());

/// Splits natural-language text into lowercase word tokens.
pub struct Tokenizer;

impl Tokenizer {
    /// Lowercase `text` and return its words in order. Punctuation and
    /// whitespace only separate words and never produce tokens. A clitic
    /// attached to a word (`customer's`) becomes its own token (`'s`), which
    /// keeps its apostrophe and so never matches a column name.
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        for caps in WORD.captures_iter(&lowered) {
            tokens.push(caps[1].to_string());
            if let Some(clitic) = caps.get(2) {
                tokens.push(clitic.as_str().replace('’', "'"));
            }
        }
        tokens
    }

    /// The word itself followed by its plausible singular forms.
    pub fn word_forms(word: &str) -> Vec<String> {
        let mut forms = vec![word.to_string()];
        let len = word.chars().count();

        if len > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                forms.push(format!("{stem}y"));
            }
        }
        if len > 3 {
            if let Some(stem) = word.strip_suffix("es") {
                forms.push(stem.to_string());
            }
            if !word.ends_with("ss") {
                if let Some(stem) = word.strip_suffix('s') {
                    forms.push(stem.to_string());
                }
            }
        }

        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_punctuation() {
        assert_eq!(
            Tokenizer::tokenize("Find all orders placed by customers last month."),
            vec!["find", "all", "orders", "placed", "by", "customers", "last", "month"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_symbols() {
        assert_eq!(
            Tokenizer::tokenize("e-mail, (order_id)?"),
            vec!["e", "mail", "order_id"]
        );
    }

    #[test]
    fn test_tokenize_keeps_clitics_apart() {
        assert_eq!(Tokenizer::tokenize("the customer's orders"), vec!["the", "customer", "'s", "orders"]);
        assert_eq!(Tokenizer::tokenize("client’s name"), vec!["client", "'s", "name"]);
        assert_eq!(Tokenizer::tokenize("list 'orders' please"), vec!["list", "orders", "please"]);
    }

    #[test]
    fn test_tokenize_keeps_numbers_and_unicode() {
        assert_eq!(Tokenizer::tokenize("Top 10 Clientes Año"), vec!["top", "10", "clientes", "año"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::tokenize("  ?! ").is_empty());
    }

    #[test]
    fn test_word_forms() {
        assert_eq!(Tokenizer::word_forms("orders"), vec!["orders", "order"]);
        assert_eq!(Tokenizer::word_forms("companies"), vec!["companies", "company", "compani", "companie"]);
        assert_eq!(Tokenizer::word_forms("purchases"), vec!["purchases", "purchas", "purchase"]);
        assert_eq!(Tokenizer::word_forms("address"), vec!["address"]);
        assert_eq!(Tokenizer::word_forms("bus"), vec!["bus"]);
        assert_eq!(Tokenizer::word_forms("last"), vec!["last"]);
    }
}
