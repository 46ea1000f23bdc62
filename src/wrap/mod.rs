//! Greedy first-fit line wrapping for pre-measured tokens.
//!
//! Tokens are placed left to right; a token that would push a non-empty row
//! past `max_width` starts a new row. A single token wider than `max_width`
//! gets a row of its own and overflows it.

/// A token with extents measured by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutToken {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

impl LayoutToken {
    pub fn new(text: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            width,
            height,
        }
    }
}

/// A token placed within its row.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Position of the token in the input sequence.
    pub index: usize,
    pub token: LayoutToken,
    pub x: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub placements: Vec<Placement>,
    pub y: f32,
    pub height: f32,
}

impl LayoutRow {
    /// Sum of token widths plus the spacing between them.
    pub fn width(&self) -> f32 {
        self.placements
            .last()
            .map(|p| p.x + p.token.width)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapLayout {
    pub rows: Vec<LayoutRow>,
    pub height: f32,
}

impl WrapLayout {
    /// Row holding the token at input position `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.placements.iter().any(|p| p.index == index))
    }
}

/// Partition `tokens` into rows no wider than `max_width`.
pub fn wrap(tokens: &[LayoutToken], max_width: f32, spacing: f32) -> WrapLayout {
    let mut groups: Vec<Vec<(usize, &LayoutToken)>> = Vec::new();
    let mut current: Vec<(usize, &LayoutToken)> = Vec::new();
    let mut accumulated = 0.0;

    for (index, token) in tokens.iter().enumerate() {
        if accumulated + token.width > max_width && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
            accumulated = 0.0;
        }
        current.push((index, token));
        accumulated += token.width + spacing;
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut rows = Vec::with_capacity(groups.len());
    let mut y = 0.0;
    for group in groups {
        let height = group
            .iter()
            .map(|(_, t)| t.height)
            .fold(0.0_f32, f32::max);

        let mut x = 0.0;
        let placements = group
            .into_iter()
            .map(|(index, token)| {
                let placement = Placement {
                    index,
                    token: token.clone(),
                    x,
                };
                x += token.width + spacing;
                placement
            })
            .collect();

        rows.push(LayoutRow {
            placements,
            y,
            height,
        });
        y += height + spacing;
    }

    let height = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.height).sum::<f32>() + spacing * (rows.len() - 1) as f32
    };

    WrapLayout { rows, height }
}

/// Split `text` on whitespace and measure every word with `measure`.
pub fn tokens_from_text<F>(text: &str, mut measure: F) -> Vec<LayoutToken>
where
    F: FnMut(&str) -> (f32, f32),
{
    text.split_whitespace()
        .map(|word| {
            let (width, height) = measure(word);
            LayoutToken::new(word, width, height)
        })
        .collect()
}
