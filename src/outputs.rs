/// Result of one inference pass, with the per-rule detail behind the crisp value
#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    value: f64,
    firing_strengths: Vec<f64>,
    total_strength: f64,
    no_rule_fired: bool,
}

impl Outputs {
    pub(crate) fn new(value: f64, firing_strengths: Vec<f64>, total_strength: f64, no_rule_fired: bool) -> Self {
        Self {
            value,
            firing_strengths,
            total_strength,
            no_rule_fired,
        }
    }

    /// The defuzzificated crisp output
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Strength of every rule, in rule order
    pub fn firing_strengths(&self) -> &[f64] {
        &self.firing_strengths
    }

    pub fn total_strength(&self) -> f64 {
        self.total_strength
    }

    /// Indices of the rules with a nonzero strength
    pub fn fired_rules(&self) -> impl Iterator<Item = usize> + '_ {
        self.firing_strengths
            .iter()
            .enumerate()
            .filter_map(|(i, w)| (*w > 0.).then_some(i))
    }

    /// Whether `value` came from the no-fire policy rather than the weighted average
    pub fn no_rule_fired(&self) -> bool {
        self.no_rule_fired
    }
}
