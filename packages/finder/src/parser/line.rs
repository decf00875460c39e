//! Line classification for model replies.
//!
//! Replies arrive as loosely formatted lists: a marker line opens each
//! business block and labeled lines carry one attribute each. The
//! classifier turns a raw line into a token; the reducer in the parent
//! module folds tokens into records.

use regex::Regex;

/// Kinds of labeled field lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    Phone,
    Website,
    About,
    Owner,
    Email,
    Rating,
}

impl FieldKind {
    /// All kinds, in the fixed order the classifier tests them.
    ///
    /// The first label found in a line wins, so a line mentioning both
    /// `address:` and `phone:` is an address line.
    pub const PRIORITY: [FieldKind; 7] = [
        FieldKind::Address,
        FieldKind::Phone,
        FieldKind::Website,
        FieldKind::About,
        FieldKind::Owner,
        FieldKind::Email,
        FieldKind::Rating,
    ];

    /// The label token that marks a line as this kind.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Address => "address:",
            FieldKind::Phone => "phone:",
            FieldKind::Website => "website:",
            FieldKind::About => "about:",
            FieldKind::Owner => "owner:",
            FieldKind::Email => "email:",
            FieldKind::Rating => "rating:",
        }
    }
}

/// One classified reply line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineToken {
    /// Start of a new record, carrying the captured name
    Name(String),

    /// A labeled field carrying its cleaned value.
    ///
    /// For `FieldKind::Rating` the value is the numeric substring found
    /// in the line; rating lines with no digits classify as `Other`.
    Field(FieldKind, String),

    /// Anything else; the reducer ignores these
    Other,
}

/// Classifies reply lines into tokens.
pub struct LineClassifier {
    numbered: Regex,
    bulleted: Regex,
    labels: Vec<(FieldKind, Regex)>,
    leading_nonword: Regex,
    number: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        let labels = FieldKind::PRIORITY
            .iter()
            .map(|&kind| {
                let pattern = Regex::new(&format!("(?i){}", kind.label())).unwrap();
                (kind, pattern)
            })
            .collect();

        Self {
            // Lazy capture so surrounding emphasis asterisks are stripped
            numbered: Regex::new(r"^\d+\.\s+\**(.+?)\**$").unwrap(),
            bulleted: Regex::new(r"^\*\s+\**(.+?)\**$").unwrap(),
            labels,
            leading_nonword: Regex::new(r"^\W+").unwrap(),
            number: Regex::new(r"\d+(\.\d+)?").unwrap(),
        }
    }

    /// Classify a raw reply line.
    pub fn classify(&self, line: &str) -> LineToken {
        let trimmed = line.trim();

        if let Some(name) = self.capture_name(trimmed) {
            return LineToken::Name(name);
        }

        for (kind, label) in &self.labels {
            if !label.is_match(trimmed) {
                continue;
            }

            if *kind == FieldKind::Rating {
                return match self.number.find(trimmed) {
                    Some(found) => LineToken::Field(FieldKind::Rating, found.as_str().to_string()),
                    None => LineToken::Other,
                };
            }

            // Remove the first label occurrence wherever it sits, then
            // strip leading punctuation left behind by list decoration.
            let stripped = label.replace(trimmed, "");
            let value = self
                .leading_nonword
                .replace(&stripped, "")
                .trim()
                .to_string();
            return LineToken::Field(*kind, value);
        }

        LineToken::Other
    }

    fn capture_name(&self, trimmed: &str) -> Option<String> {
        self.numbered
            .captures(trimmed)
            .or_else(|| self.bulleted.captures(trimmed))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
