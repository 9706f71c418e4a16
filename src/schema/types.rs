/// Separator placed between `column:spec` pairs in a definition string
pub const DEFINITION_SEPARATOR: &str = ", ";

/// Separator between the type and modifier segments of a column spec
pub const SEGMENT_SEPARATOR: char = ':';

/// Body of a single schema entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    /// JSON `null`: no columns (pivot table placeholder when the key is `{a}_{b}_pivot`)
    Null,
    /// Column name -> column spec, in input order
    Columns(Vec<(String, String)>),
}

impl EntryBody {
    pub fn columns(&self) -> &[(String, String)] {
        match self {
            EntryBody::Null => &[],
            EntryBody::Columns(columns) => columns,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, EntryBody::Null)
    }
}

/// One top-level key of the input document
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    pub key: String,
    pub body: EntryBody,
}

impl SchemaEntry {
    pub fn new(key: impl Into<String>, body: EntryBody) -> Self {
        Self {
            key: key.into(),
            body,
        }
    }

    /// Join the `column:spec` pairs of this entry into a definition string
    pub fn definition(&self) -> String {
        self.body
            .columns()
            .iter()
            .map(|(column, spec)| format!("{}{}{}", column, SEGMENT_SEPARATOR, spec))
            .collect::<Vec<_>>()
            .join(DEFINITION_SEPARATOR)
    }
}

/// Decoded input document, entries kept in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    entries: Vec<SchemaEntry>,
}

impl SchemaDocument {
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A type or modifier token split into its name and optional parameter list.
///
/// `string(50)` parses to name `string` with params `50`; `after('id')` to
/// name `after` with params `'id'`; `unique` has no params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnToken<'a> {
    pub raw: &'a str,
    pub name: &'a str,
    pub params: Option<&'a str>,
}

impl<'a> ColumnToken<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        match trimmed.find('(') {
            Some(open) => {
                let rest = &trimmed[open + 1..];
                let params = rest.strip_suffix(')').unwrap_or(rest);
                Self {
                    raw,
                    name: trimmed[..open].trim_end(),
                    params: Some(params),
                }
            }
            None => Self {
                raw,
                name: trimmed,
                params: None,
            },
        }
    }
}

/// Split a column spec on `:`, ignoring separators inside parentheses or quotes
pub fn split_segments(spec: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in spec.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                SEGMENT_SEPARATOR if depth == 0 => {
                    segments.push(&spec[start..i]);
                    start = i + c.len_utf8();
                }
                _ => {}
            },
        }
    }
    segments.push(&spec[start..]);

    // Unbalanced parentheses or quotes: split on every separator instead
    if depth != 0 || quote.is_some() {
        return spec.split(SEGMENT_SEPARATOR).collect();
    }

    segments
}
