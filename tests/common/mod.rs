use sugeno_fuzzy::{FuzzySystem, InputVariable, MembershipFunction, Rule};

/// Tip percentage from food and service quality, both rated 0 to 10
pub fn tipping_system() -> FuzzySystem {
    let mut food = InputVariable::new("food", 0. ..=10.);
    let mut service = InputVariable::new("service", 0. ..=10.);

    for var in [&mut food, &mut service] {
        var.set_term("baja", MembershipFunction::triangular(0., 0., 5.).unwrap())
            .set_term("regular", MembershipFunction::triangular(0., 5., 10.).unwrap())
            .set_term("excelente", MembershipFunction::triangular(5., 10., 10.).unwrap());
    }

    let rule = |f: &str, s: &str, tip: f64| Rule::new(food.is(f).unwrap() & service.is(s).unwrap(), tip).unwrap();

    FuzzySystem::new([
        rule("baja", "baja", 0.),
        rule("baja", "regular", 5.),
        rule("regular", "baja", 8.),
        rule("baja", "excelente", 10.),
        rule("excelente", "baja", 9.),
        rule("regular", "regular", 10.),
        rule("regular", "excelente", 12.),
        rule("excelente", "regular", 15.),
        rule("excelente", "excelente", 20.),
    ])
}
