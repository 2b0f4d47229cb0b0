//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests don't each invent their own water.

#![doc(hidden)]

use crate::types::{Atom, Bond, Molecule};

/// Molecule with the given atoms and bonds and catalog metadata filled in.
pub fn make_molecule(id: &str, name: &str, atoms: Vec<Atom>, bonds: Vec<Bond>) -> Molecule {
    Molecule {
        id: id.to_string(),
        name: name.to_string(),
        formula: String::new(),
        wiki_title: Some(name.replace(' ', "_")),
        atoms,
        bonds,
    }
}

/// Bent water: O at the origin, hydrogens up and to the sides.
pub fn water() -> Molecule {
    Molecule {
        formula: "H₂O".to_string(),
        ..make_molecule(
            "h2o",
            "Water",
            vec![
                Atom::new("O", 0.0, 0.0),
                Atom::new("H", 0.96, 0.26),
                Atom::new("H", -0.96, 0.26),
            ],
            vec![Bond::new(0, 1), Bond::new(0, 2)],
        )
    }
}

/// Straight chain of `n` carbons one unit apart on the x axis.
pub fn carbon_chain(n: usize) -> Molecule {
    let atoms = (0..n).map(|i| Atom::new("C", i as f64, 0.0)).collect();
    let bonds = (1..n).map(|i| Bond::new(i - 1, i)).collect();
    make_molecule(&format!("c{}", n), &format!("Chain {}", n), atoms, bonds)
}

/// Two atoms, `(0, 0)` and `(10, 0)`, bonded.
pub fn diatomic() -> Molecule {
    Molecule::from_parts(
        vec![Atom::new("N", 0.0, 0.0), Atom::new("N", 10.0, 0.0)],
        vec![Bond::new(0, 1)],
    )
}

/// Canvas x coordinates of every atom circle, in atom order.
pub fn circle_xs(scene: &crate::render::Scene) -> Vec<f64> {
    scene.circles().map(|c| c.cx).collect()
}

/// Canvas y coordinates of every atom circle, in atom order.
pub fn circle_ys(scene: &crate::render::Scene) -> Vec<f64> {
    scene.circles().map(|c| c.cy).collect()
}
