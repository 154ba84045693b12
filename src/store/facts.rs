use rand::Rng;

/// Fact table for the status row. A fresh one is picked on load and every
/// time a phase completes.
const FACTS: &[&str] = &[
    "Honey never spoils; edible jars have been found in ancient tombs.",
    "Octopuses have three hearts and blue blood.",
    "Bananas are berries, but strawberries are not.",
    "A day on Venus is longer than its year.",
    "The Eiffel Tower grows about 15 cm taller in summer.",
    "Wombats produce cube-shaped droppings.",
    "Hot water can freeze faster than cold water.",
    "There are more possible chess games than atoms in the observable universe.",
    "Sharks existed before trees.",
    "The inventor of the frisbee was turned into a frisbee after he died.",
    "A group of flamingos is called a flamboyance.",
    "Scotland's national animal is the unicorn.",
];

/// Pick a random fact.
pub fn pick() -> &'static str {
    FACTS[rand::rng().random_range(0..FACTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_returns_a_known_fact() {
        for _ in 0..32 {
            assert!(FACTS.contains(&pick()));
        }
    }
}
