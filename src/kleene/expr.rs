//! Regular expression syntax tree and its text form.

use std::collections::HashSet;
use std::fmt::{self, Write};
use std::sync::Arc;

/// A regular expression built during state elimination.
///
/// Subexpressions are shared: each elimination step reuses cells of the
/// previous matrix several times, so the tree is really a DAG whose size
/// grows polynomially while its text grows exponentially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// The empty language, written `{}`.
    Empty,
    /// The empty string, written `eps`.
    Epsilon,
    /// A single alphabet symbol, written verbatim.
    Symbol(String),
    /// Alternation of the contained expressions.
    Union(Vec<Arc<Expr>>),
    /// Concatenation of the contained expressions.
    Concat(Vec<Arc<Expr>>),
    /// Kleene closure of the contained expression.
    Star(Arc<Expr>),
}

impl Expr {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::Symbol(symbol.into())
    }

    /// Render the expression with its outermost alternation unwrapped.
    ///
    /// Inner alternations keep their parentheses. For anything other than a
    /// `Union` this is the same as the `Display` form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsa_kleene::kleene::Expr;
    /// use std::sync::Arc;
    ///
    /// let inner = Arc::new(Expr::Union(vec![Arc::new(Expr::symbol("a"))]));
    /// let outer = Expr::Union(vec![inner, Arc::new(Expr::Epsilon)]);
    ///
    /// assert_eq!(outer.to_string(), "((a)|eps)");
    /// assert_eq!(outer.render_bare(), "(a)|eps");
    /// ```
    pub fn render_bare(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_bare(&mut out);
        out
    }

    /// Write the expression with its outermost alternation unwrapped.
    pub fn write_bare<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Union(branches) => write_branches(branches, out),
            other => write!(out, "{other}"),
        }
    }

    /// Number of distinct nodes reachable from this one, counting shared
    /// subexpressions once.
    pub fn node_count(&self) -> usize {
        count_nodes(self, &mut HashSet::new())
    }
}

fn count_nodes(expr: &Expr, seen: &mut HashSet<*const Expr>) -> usize {
    let children: &[Arc<Expr>] = match expr {
        Expr::Union(items) | Expr::Concat(items) => items,
        Expr::Star(inner) => std::slice::from_ref(inner),
        _ => &[],
    };

    let mut count = 1;
    for child in children {
        if seen.insert(Arc::as_ptr(child)) {
            count += count_nodes(child, seen);
        }
    }
    count
}

fn write_branches<W: Write>(branches: &[Arc<Expr>], out: &mut W) -> fmt::Result {
    for (i, branch) in branches.iter().enumerate() {
        if i > 0 {
            out.write_char('|')?;
        }
        write!(out, "{branch}")?;
    }
    Ok(())
}

/// Text form used in the output.
///
/// - `Empty` is `{}`, `Epsilon` is `eps`, a symbol is its own text
/// - `Concat` juxtaposes its parts, `Star` appends `*` to its operand
/// - `Union` joins its branches with `|` inside one pair of parentheses
///
/// No simplification is applied; redundant `{}` and `eps` stay in place.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("{}"),
            Self::Epsilon => f.write_str("eps"),
            Self::Symbol(symbol) => f.write_str(symbol),
            Self::Union(branches) => {
                f.write_char('(')?;
                write_branches(branches, &mut *f)?;
                f.write_char(')')
            }
            Self::Concat(parts) => parts.iter().try_for_each(|part| write!(f, "{part}")),
            Self::Star(inner) => write!(f, "{inner}*"),
        }
    }
}
