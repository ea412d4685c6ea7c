#[derive(Debug, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }

    // None on overflow
    pub fn checked_add(&self, a: i32, b: i32) -> Option<i32> {
        a.checked_add(b)
    }
}
