//! Map colouring as a CSP: one variable per region, one pairwise
//! [`AllDifferent`] constraint per adjacency.

use std::fmt;

use im::OrdSet;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        constraints::all_different::AllDifferent,
        csp::Csp,
        variable::{Variable, VariableId},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
        };
        write!(f, "{name}")
    }
}

/// A k-colourability problem over a region-adjacency graph.
///
/// Binary "these two regions differ" constraints are expressed with the
/// two-variable form of [`AllDifferent`].
#[derive(Debug, Clone)]
pub struct MapColouringCsp {
    regions: Vec<VariableId>,
    adjacencies: Vec<(VariableId, VariableId)>,
    palette: Vec<Colour>,
}

impl MapColouringCsp {
    pub fn new(regions: &[&str], adjacencies: &[(&str, &str)], palette: &[Colour]) -> Self {
        Self {
            regions: regions.iter().map(|region| VariableId::from(*region)).collect(),
            adjacencies: adjacencies
                .iter()
                .map(|(a, b)| (VariableId::from(*a), VariableId::from(*b)))
                .collect(),
            palette: palette.to_vec(),
        }
    }

    /// The introductory example from Russell & Norvig: the seven states and
    /// territories of Australia, three colours, nine adjacencies.
    pub fn australia() -> Self {
        Self::new(
            &["WA", "NT", "SA", "QL", "NSW", "VI", "TS"],
            &[
                ("WA", "NT"),
                ("WA", "SA"),
                ("NT", "QL"),
                ("NT", "SA"),
                ("SA", "QL"),
                ("QL", "NSW"),
                ("SA", "NSW"),
                ("SA", "VI"),
                ("NSW", "VI"),
            ],
            &[Colour::Red, Colour::Green, Colour::Blue],
        )
    }

    pub fn regions(&self) -> &[VariableId] {
        &self.regions
    }

    pub fn adjacencies(&self) -> &[(VariableId, VariableId)] {
        &self.adjacencies
    }
}

impl Csp for MapColouringCsp {
    type Value = Colour;

    fn initial_assignment(&self) -> Result<Assignment<Colour>> {
        let palette: OrdSet<Colour> = self.palette.iter().copied().collect();
        Ok(Assignment::new(
            self.regions
                .iter()
                .map(|region| Variable::unassigned(region.clone(), palette.clone())),
        ))
    }

    fn constraints(&self) -> Vec<Box<dyn Constraint<Colour>>> {
        self.adjacencies
            .iter()
            .map(|(a, b)| {
                Box::new(AllDifferent::new([a.clone(), b.clone()])) as Box<dyn Constraint<Colour>>
            })
            .collect()
    }
}
