use std::collections::VecDeque;
use std::io::Write;

use big_num::BigInt;

use crate::error::{GlyphoErrorType, Result};

/// The interpreter's stack. The front of the deque is the top of the stack; the
/// rotate instructions move values between the top and the bottom.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    data: VecDeque<BigInt>,
}

impl Memory {
    pub fn new() -> Self {
        Memory { data: VecDeque::new() }
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Values from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.data.iter()
    }

    pub fn push(&mut self, value: BigInt) {
        self.data.push_front(value);
    }
    pub fn pop(&mut self) -> Result<BigInt> {
        self.data.pop_front().ok_or(GlyphoErrorType::EmptyStack)
    }
    pub fn peek(&self) -> Result<&BigInt> {
        self.data.front().ok_or(GlyphoErrorType::EmptyStack)
    }
    pub fn peek_mut(&mut self) -> Result<&mut BigInt> {
        self.data.front_mut().ok_or(GlyphoErrorType::EmptyStack)
    }
    pub fn remove_top(&mut self) -> Result<()> {
        self.pop().map(drop)
    }
    /// Moves the top value to the bottom.
    pub fn shift_up(&mut self) -> Result<()> {
        let value = self.pop()?;
        self.data.push_back(value);
        Ok(())
    }
    /// Moves the bottom value to the top.
    pub fn shift_down(&mut self) -> Result<()> {
        let value = self.data.pop_back().ok_or(GlyphoErrorType::EmptyStack)?;
        self.data.push_front(value);
        Ok(())
    }
    pub fn duplicate_top(&mut self) -> Result<()> {
        let value = self.peek()?.clone();
        self.push(value);
        Ok(())
    }
    pub fn swap_top(&mut self) -> Result<()> {
        if self.data.len() < 2 {
            return Err(GlyphoErrorType::EmptyStack);
        }
        self.data.swap(0, 1);
        Ok(())
    }
    /// Writes every value, top first, in decimal whatever the I/O base.
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<()> {
        for (index, value) in self.data.iter().enumerate() {
            writeln!(out, "MEM_DUMP [{}]: {}", index, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[i64]) -> Memory {
        let mut memory = Memory::new();
        for &value in values.iter().rev() {
            memory.push(value.into());
        }
        memory
    }

    fn contents(memory: &Memory) -> Vec<BigInt> {
        memory.iter().cloned().collect()
    }

    #[test]
    fn test_push_pop() {
        let mut memory = Memory::new();
        memory.push(BigInt::from(1));
        memory.push(BigInt::from(2));
        assert_eq!(memory.peek().unwrap(), &BigInt::from(2));
        assert_eq!(memory.pop().unwrap(), BigInt::from(2));
        assert_eq!(memory.pop().unwrap(), BigInt::from(1));
        assert!(matches!(memory.pop(), Err(GlyphoErrorType::EmptyStack)));
        assert!(matches!(memory.peek(), Err(GlyphoErrorType::EmptyStack)));
    }

    #[test]
    fn test_peek_mut() {
        let mut memory = stack(&[5]);
        memory.peek_mut().unwrap().negate();
        assert_eq!(memory.pop().unwrap(), BigInt::from(-5));
    }

    #[test]
    fn test_rotate() {
        let mut memory = stack(&[1, 2, 3]);
        memory.shift_up().unwrap();
        assert_eq!(contents(&memory), stack(&[2, 3, 1]).iter().cloned().collect::<Vec<_>>());
        memory.shift_down().unwrap();
        assert_eq!(contents(&memory), stack(&[1, 2, 3]).iter().cloned().collect::<Vec<_>>());
        assert!(Memory::new().shift_up().is_err());
        assert!(Memory::new().shift_down().is_err());
    }

    #[test]
    fn test_duplicate_swap() {
        let mut memory = stack(&[1, 2]);
        memory.swap_top().unwrap();
        assert_eq!(contents(&memory), vec![BigInt::from(2), BigInt::from(1)]);
        memory.duplicate_top().unwrap();
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.peek().unwrap(), &BigInt::from(2));

        let mut memory = stack(&[1]);
        assert!(matches!(memory.swap_top(), Err(GlyphoErrorType::EmptyStack)));
        memory.remove_top().unwrap();
        assert!(memory.is_empty());
        assert!(Memory::new().duplicate_top().is_err());
    }

    #[test]
    fn test_dump() {
        let memory = stack(&[255, -1]);
        let mut out = Vec::new();
        memory.dump(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "MEM_DUMP [0]: 255\nMEM_DUMP [1]: -1\n\n");
    }
}
