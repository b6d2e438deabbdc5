//! Composition sketch: a car owns a share of an engine.
//!
//! Illustrative counterpart to the figure hierarchy. Nothing in the driver
//! constructs a [`Car`]; the point is the ownership shape: the engine lives
//! exactly as long as its longest-lived holder.

use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Engine;

#[derive(Debug)]
pub struct Car {
    engine: Rc<Engine>,
}

impl Car {
    pub fn new(engine: Rc<Engine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cars_share_one_engine() {
        let engine = Rc::new(Engine);
        let first = Car::new(Rc::clone(&engine));
        let second = Car::new(Rc::clone(&engine));

        assert_eq!(Rc::strong_count(&engine), 3);

        drop(first);
        assert_eq!(Rc::strong_count(&engine), 2);
        let _still_running = second.engine();
    }
}
