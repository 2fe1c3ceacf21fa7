//! Text emission of `Split` impls.
//!
//! Output layout per arity (shown for three elements):
//!
//! ```text
//! impl<A, B, C> Split for (A, B, C) {
//!     type Left = (A,);
//!     type Right = (B, C);
//!     fn split(self) -> (Self::Left, Self::Right) {
//!         match self {
//!             (a, b, c) =>
//!                 ((a,),
//!                  (b, c))
//!         }
//!     }
//! }
//! ```
//!
//! Every block is followed by a blank line.

use crate::error::GenError;
use crate::split::split;
use crate::symbol::{MAX_SYMBOLS, symbols};
use std::fmt::Write as _;
use std::io;
use std::ops::RangeInclusive;

/// Smallest arity that still splits into two non-empty halves.
pub const MIN_ARITY: usize = 2;

/// Last arity generated when nothing else is configured.
pub const DEFAULT_MAX_ARITY: usize = 16;

/// Inclusive range of arities to generate, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityRange {
    min: usize,
    max: usize,
}

impl Default for ArityRange {
    fn default() -> Self {
        Self {
            min: MIN_ARITY,
            max: DEFAULT_MAX_ARITY,
        }
    }
}

impl ArityRange {
    /// Build a range, rejecting empty ranges and bounds outside `2..=26`.
    pub fn new(min: usize, max: usize) -> Result<Self, GenError> {
        if min < MIN_ARITY || min > max || max > MAX_SYMBOLS {
            return Err(GenError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of impl blocks this range produces.
    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    /// Always false: construction rejects empty ranges.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn arities(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Trait named in every impl header.
    pub trait_name: String,
    /// Emit the trait definition once before the impls.
    pub with_trait_definition: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            trait_name: "Split".to_string(),
            with_trait_definition: false,
        }
    }
}

/// One arity's worth of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitImpl {
    symbols: Vec<char>,
}

impl SplitImpl {
    pub fn new(arity: usize) -> Result<Self, GenError> {
        Ok(Self {
            symbols: symbols(arity)?,
        })
    }

    pub fn arity(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn left(&self) -> &[char] {
        split(&self.symbols).0
    }

    pub fn right(&self) -> &[char] {
        split(&self.symbols).1
    }

    /// Render the impl block, without the trailing blank line.
    pub fn render(&self, trait_name: &str) -> String {
        let (left, right) = split(&self.symbols);
        let all = &self.symbols;

        let mut out = String::new();
        writeln!(
            out,
            "impl<{}> {} for {} {{",
            join(all),
            trait_name,
            tuple(all)
        )
        .unwrap();
        writeln!(out, "    type Left = {};", tuple(left)).unwrap();
        writeln!(out, "    type Right = {};", tuple(right)).unwrap();
        writeln!(out, "    fn split(self) -> (Self::Left, Self::Right) {{").unwrap();
        writeln!(out, "        match self {{").unwrap();
        writeln!(out, "            {} =>", tuple(&lower(all))).unwrap();
        writeln!(out, "                ({},", tuple(&lower(left))).unwrap();
        writeln!(out, "                 {})", tuple(&lower(right))).unwrap();
        writeln!(out, "        }}").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out, "}}").unwrap();
        out
    }
}

/// Render the trait definition the impls belong to.
pub fn render_trait_definition(trait_name: &str) -> String {
    let mut out = String::new();
    writeln!(out, "pub trait {} {{", trait_name).unwrap();
    writeln!(out, "    type Left;").unwrap();
    writeln!(out, "    type Right;").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    fn split(self) -> (Self::Left, Self::Right);").unwrap();
    writeln!(out, "}}").unwrap();
    out
}

/// Write one block per arity in `range` to `out`, each followed by a blank
/// line. Returns the number of impl blocks written.
pub fn emit<W: io::Write>(
    out: &mut W,
    range: &ArityRange,
    options: &EmitOptions,
) -> Result<usize, GenError> {
    if options.with_trait_definition {
        let mut text = render_trait_definition(&options.trait_name);
        text.push('\n');
        out.write_all(text.as_bytes())?;
    }

    let mut blocks = 0;
    for arity in range.arities() {
        let imp = SplitImpl::new(arity)?;
        tracing::debug!(
            arity,
            left = imp.left().len(),
            right = imp.right().len(),
            "emitting impl"
        );
        let mut text = imp.render(&options.trait_name);
        text.push('\n');
        out.write_all(text.as_bytes())?;
        blocks += 1;
    }
    out.flush()?;

    tracing::debug!(blocks, "emission finished");
    Ok(blocks)
}

fn join(items: &[char]) -> String {
    items
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tuple syntax; a single element keeps its trailing comma.
fn tuple(items: &[char]) -> String {
    if items.len() == 1 {
        format!("({},)", items[0])
    } else {
        format!("({})", join(items))
    }
}

fn lower(items: &[char]) -> Vec<char> {
    items.iter().map(char::to_ascii_lowercase).collect()
}
