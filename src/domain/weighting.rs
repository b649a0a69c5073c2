/// Anything that enters a portfolio or grid sum as `multiplier` independent,
/// identical copies, and not at all when disabled.
pub trait Weighted {
    fn is_enabled(&self) -> bool;
    fn multiplier(&self) -> u32;

    /// Number of copies this entity contributes to an aggregate.
    fn weight(&self) -> f64 {
        if self.is_enabled() {
            f64::from(self.multiplier())
        } else {
            0.0
        }
    }

    /// `enabled ? multiplier * value : 0`
    fn contribution(&self, value: f64) -> f64 {
        self.weight() * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity {
        enabled: bool,
        multiplier: u32,
    }

    impl Weighted for Entity {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn multiplier(&self) -> u32 {
            self.multiplier
        }
    }

    #[test]
    fn enabled_entity_contributes_multiplier_copies() {
        let entity = Entity {
            enabled: true,
            multiplier: 3,
        };
        assert_eq!(entity.contribution(2.5), 7.5);
    }

    #[test]
    fn disabled_entity_contributes_nothing() {
        let entity = Entity {
            enabled: false,
            multiplier: 4,
        };
        assert_eq!(entity.weight(), 0.0);
        assert_eq!(entity.contribution(10.0), 0.0);
    }
}
