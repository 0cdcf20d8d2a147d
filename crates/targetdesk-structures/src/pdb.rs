//! Fixed-column PDB parsing for the 3D viewer.
//!
//! Recognizes ATOM/HETATM records for atom coordinates and CONECT records
//! for connectivity. Output matches the model-data shape the viewer widget
//! expects: an atom list and a list of zero-based bond index pairs.
//! Malformed lines are skipped; garbage input yields empty lists.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single atom record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub serial: i32,
    pub name: String,
    pub residue_name: String,
    pub chain_id: String,
    pub residue_index: i32,
    pub positions: [f64; 3],
    pub atom_type: String,
}

/// Atom and bond lists for the viewer widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelData {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<[usize; 2]>,
}

/// Parse PDB text into viewer model data.
pub fn parse_pdb(text: &str) -> ModelData {
    let mut atoms = Vec::new();
    let mut bonds = Vec::new();
    // PDB serial number -> index into `atoms`
    let mut atom_index: HashMap<i32, usize> = HashMap::new();

    for line in text.lines() {
        if line.starts_with("ATOM") || line.starts_with("HETATM") {
            match parse_atom_line(line) {
                Some(atom) => {
                    atom_index.insert(atom.serial, atoms.len());
                    atoms.push(atom);
                }
                None => tracing::debug!("skipping malformed atom record: {line}"),
            }
        } else if line.starts_with("CONECT") {
            parse_conect_line(line, &atom_index, &mut bonds);
        }
    }

    ModelData { atoms, bonds }
}

/// Columns per the PDB format spec: serial 6..11, name 12..16, residue
/// 17..20, chain 21..22, residue seq 22..26, x/y/z 30..38/38..46/46..54,
/// element 76..78 (falling back to the first character of the atom name).
fn parse_atom_line(line: &str) -> Option<Atom> {
    let serial: i32 = field(line, 6, 11)?.parse().ok()?;
    let name = field(line, 12, 16)?.to_string();
    let residue_name = field(line, 17, 20)?.to_string();
    let chain_id = field(line, 21, 22)?.to_string();
    let residue_index: i32 = field(line, 22, 26)?.parse().ok()?;
    let x: f64 = field(line, 30, 38)?.parse().ok()?;
    let y: f64 = field(line, 38, 46)?.parse().ok()?;
    let z: f64 = field(line, 46, 54)?.parse().ok()?;

    let atom_type = match field(line, 76, 78) {
        Some(el) if !el.is_empty() => el.to_string(),
        _ => name.chars().next().map(String::from).unwrap_or_default(),
    };

    Some(Atom {
        serial,
        name,
        residue_name,
        chain_id,
        residue_index,
        positions: [x, y, z],
        atom_type,
    })
}

/// CONECT lists one source serial followed by its bonded serials.
fn parse_conect_line(line: &str, atom_index: &HashMap<i32, usize>, bonds: &mut Vec<[usize; 2]>) {
    let serials: Vec<i32> = line
        .split_whitespace()
        .skip(1)
        .filter_map(|f| f.parse().ok())
        .collect();

    if let Some((&first, rest)) = serials.split_first() {
        if let Some(&from) = atom_index.get(&first) {
            for other in rest {
                if let Some(&to) = atom_index.get(other) {
                    bonds.push([from, to]);
                }
            }
        }
    }
}

fn field(line: &str, start: usize, end: usize) -> Option<&str> {
    line.get(start..end.min(line.len())).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00  0.00           N
ATOM      2  CA  MET A   1      11.639   6.071  -5.147  1.00  0.00           C
CONECT    1    2
END";

    #[test]
    fn minimal_file_yields_two_atoms_one_bond() {
        let model = parse_pdb(MINIMAL);
        assert_eq!(model.atoms.len(), 2);
        assert_eq!(model.bonds, vec![[0, 1]]);

        let n = &model.atoms[0];
        assert_eq!(n.serial, 1);
        assert_eq!(n.name, "N");
        assert_eq!(n.residue_name, "MET");
        assert_eq!(n.chain_id, "A");
        assert_eq!(n.residue_index, 1);
        assert!((n.positions[0] - 11.104).abs() < 1e-9);
        assert_eq!(n.atom_type, "N");
    }

    #[test]
    fn element_falls_back_to_atom_name() {
        // Short line without the element columns.
        let line = "ATOM      3  CB  ALA A   2       1.000   2.000   3.000";
        let model = parse_pdb(line);
        assert_eq!(model.atoms.len(), 1);
        assert_eq!(model.atoms[0].atom_type, "C");
    }

    #[test]
    fn garbage_input_yields_empty_model() {
        let model = parse_pdb("this is not\na pdb file\nATOM but broken");
        assert!(model.atoms.is_empty());
        assert!(model.bonds.is_empty());
    }

    #[test]
    fn conect_to_unknown_serial_is_ignored() {
        let text = "\
ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00  0.00           N
CONECT    1    9";
        let model = parse_pdb(text);
        assert_eq!(model.atoms.len(), 1);
        assert!(model.bonds.is_empty());
    }

    #[test]
    fn hetatm_records_are_parsed() {
        let text =
            "HETATM    1  O   HOH A 101       0.000   0.000   0.000  1.00  0.00           O";
        let model = parse_pdb(text);
        assert_eq!(model.atoms.len(), 1);
        assert_eq!(model.atoms[0].residue_name, "HOH");
    }
}
