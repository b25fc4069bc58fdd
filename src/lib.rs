//! Zero-order Takagi-Sugeno fuzzy inference.
//!
//! Crisp inputs are fuzzificated against the linguistic terms of each
//! [`InputVariable`], every [`Rule`] premise is evaluated to a firing strength,
//! and the crisp rule consequents are combined by a strength weighted average.
//!
//! ```
//! use sugeno_fuzzy::{FuzzySystem, InputVariable, Inputs, MembershipFunction, Rule};
//!
//! # fn main() -> sugeno_fuzzy::Result<()> {
//! let mut food = InputVariable::new("food", 0. ..=10.);
//! let mut service = InputVariable::new("service", 0. ..=10.);
//!
//! for var in [&mut food, &mut service] {
//!     var.set_term("bad", MembershipFunction::triangular(0., 0., 10.)?)
//!         .set_term("good", MembershipFunction::triangular(0., 10., 10.)?);
//! }
//!
//! let system = FuzzySystem::new([
//!     Rule::new(food.is("bad")? & service.is("bad")?, 0.)?,
//!     Rule::new(food.is("good")? & service.is("good")?, 20.)?,
//! ]);
//! let tip = system.compute(&Inputs::from_iter([("food", 10.), ("service", 10.)]))?;
//!
//! assert_eq!(tip, 20.);
//! # Ok(())
//! # }
//! ```

mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use dsl::{and_, FuzzyPredicate};
pub use error::{FuzzyError, Result};
pub use inference::{FuzzySystem, NoFirePolicy};
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use membership::MembershipFunction;
pub use ops::{AndOp, OrOp};
pub use outputs::Outputs;
pub use rules::Rule;
pub use terms::LinguisticTerm;
pub use variable::InputVariable;
