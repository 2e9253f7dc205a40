//! Line-notation helpers: an advisory alphabet check and an MDL molblock
//! writer for generated graphs.

use std::fmt::Write as _;

use super::element::Element;
use super::graph::MolecularGraph;

/// Whether `notation` is non-empty and uses only line-notation characters
/// (letters, digits, brackets, parentheses and `.=#-+\/@%*:$`).
///
/// This is a cheap sanity check for user input, not a grammar. The generator
/// accepts any string regardless of the result.
#[must_use]
pub fn looks_like_notation(notation: &str) -> bool {
    !notation.is_empty() && notation.chars().all(is_notation_char)
}

fn is_notation_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '[' | ']'
                | '('
                | ')'
                | '.'
                | '='
                | '#'
                | '-'
                | '+'
                | '\\'
                | '/'
                | '@'
                | '%'
                | '*'
                | ':'
                | '$'
        )
}

/// V2000 charge code for a formal charge.
fn charge_code(charge: i8) -> u8 {
    match charge {
        3 => 1,
        2 => 2,
        1 => 3,
        -1 => 5,
        -2 => 6,
        -3 => 7,
        _ => 0,
    }
}

fn molblock_symbol(element: Element) -> &'static str {
    match element {
        Element::Unknown => "*",
        other => other.symbol(),
    }
}

/// Format `graph` as an MDL V2000 molblock.
///
/// `title` becomes the first header line (typically the source notation).
/// Indices are 1-based, bond types use their ordinal, and charged atoms are
/// repeated in `M  CHG` property lines of at most eight entries each.
#[must_use]
pub fn to_molblock(graph: &MolecularGraph, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.lines().next().unwrap_or(""));
    let _ = writeln!(out, "  molscope      3D");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000",
        graph.atom_count(),
        graph.bond_count()
    );

    for atom in graph.atoms() {
        let p = atom.position;
        let _ = writeln!(
            out,
            "{:>10.4}{:>10.4}{:>10.4} {:<3} 0{:>3}  0  0  0  0  0  0  0  0  0  0",
            p.x,
            p.y,
            p.z,
            molblock_symbol(atom.element),
            charge_code(atom.effective_charge())
        );
    }

    for bond in graph.bonds() {
        let _ = writeln!(
            out,
            "{:>3}{:>3}{:>3}  0",
            bond.from + 1,
            bond.to + 1,
            bond.bond_type.ordinal()
        );
    }

    let charged: Vec<(usize, i8)> = graph
        .atoms()
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_charged())
        .map(|(i, a)| (i + 1, a.effective_charge()))
        .collect();
    for chunk in charged.chunks(8) {
        let _ = write!(out, "M  CHG{:>3}", chunk.len());
        for (index, charge) in chunk {
            let _ = write!(out, " {index:>3} {charge:>3}");
        }
        let _ = writeln!(out);
    }

    out.push_str("M  END\n");
    out
}
