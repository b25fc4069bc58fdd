use std::collections::HashMap;

/// Crisp input values keyed by variable name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) HashMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Sets the value of `var`, replacing any previous one
    pub fn add(&mut self, var: impl Into<String>, val: f64) -> &mut Self {
        self.0.insert(var.into(), val);
        self
    }

    pub fn get(&self, var: &str) -> Option<f64> {
        self.0.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Inputs(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Inputs {
    fn extend<T: IntoIterator<Item = (K, f64)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

#[test]
fn test_inputs() {
    let mut inputs = Inputs::from_iter([("food", 3.)]);

    inputs.add("service", 7.).add("food", 4.);
    inputs.extend([("ambience", 1.)]);

    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs.get("food"), Some(4.));
    assert_eq!(inputs.get("price"), None);
    assert!(!inputs.is_empty());
}
