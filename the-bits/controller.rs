//! Intent handling on top of a [`RegisterPair`].
//!
//! Every user action arrives as an [`Intent`]. An intent is either applied
//! completely or rejected with an [`Error`] and no visible change: new
//! register contents are computed first and only swapped in once they are
//! known to be valid.
//!
//! A [`Controller`] mutates its registers in place and is meant to be driven
//! from a single thread. Share it across threads only behind external
//! synchronization such as a mutex.

use crate::{
  BitVector,
  Error,
  RegisterConfig,
  Result,
  codec::{
    self,
    Base,
  },
  field::{
    self,
    BitRange,
    IndexOrder,
  },
  pair::{
    ComparisonMask,
    RegisterPair,
    Row,
  },
  shift::{
    self,
    ShiftDirection,
  },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
  ToggleBit {
    row:   Row,
    index: usize,
  },
  CommitNumericText {
    row:  Row,
    text: String,
  },
  ChangeBase(Base),
  Clear(Row),
  Invert(Row),
  Reverse(Row),
  Shift {
    row:       Row,
    direction: ShiftDirection,
    amount:    i64,
  },
}

#[derive(Debug, Clone)]
pub struct Controller {
  pair:  RegisterPair,
  order: IndexOrder,
}

impl Controller {
  pub fn new(config: &RegisterConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      pair:  RegisterPair::new(config.width, config.base)?,
      order: config.index_order,
    })
  }

  pub fn apply(&mut self, intent: Intent) -> Result<()> {
    let result = match &intent {
      Intent::ToggleBit { row, index } => self.pair.toggle_bit(*row, *index),
      Intent::CommitNumericText { row, text } => self.commit(*row, text),
      Intent::ChangeBase(base) => {
        self.pair.set_base(*base);
        Ok(())
      },
      Intent::Clear(row) => {
        self.pair.clear(*row);
        Ok(())
      },
      Intent::Invert(row) => {
        self.pair.invert(*row);
        Ok(())
      },
      Intent::Reverse(row) => {
        self.pair.reverse(*row);
        Ok(())
      },
      Intent::Shift {
        row,
        direction,
        amount,
      } => self.shift_row(*row, *direction, *amount),
    };

    match &result {
      Ok(()) => tracing::debug!(?intent, "applied intent"),
      Err(err) => tracing::warn!(?intent, %err, "rejected intent"),
    }
    result
  }

  fn commit(&mut self, row: Row, text: &str) -> Result<()> {
    let bits = codec::decode(text, self.pair.base(), self.pair.width())?;
    self.pair.replace(row, bits)
  }

  fn shift_row(&mut self, row: Row, direction: ShiftDirection, amount: i64) -> Result<()> {
    let bits = shift::shift(self.pair.register(row), amount, direction)?;
    self.pair.replace(row, bits)
  }

  pub fn toggle_bit(&mut self, row: Row, index: usize) -> Result<()> {
    self.apply(Intent::ToggleBit { row, index })
  }

  pub fn commit_numeric_text(&mut self, row: Row, text: impl Into<String>) -> Result<()> {
    self.apply(Intent::CommitNumericText {
      row,
      text: text.into(),
    })
  }

  pub fn change_base(&mut self, base: Base) {
    self.apply_infallible(Intent::ChangeBase(base));
  }

  pub fn clear(&mut self, row: Row) {
    self.apply_infallible(Intent::Clear(row));
  }

  pub fn invert(&mut self, row: Row) {
    self.apply_infallible(Intent::Invert(row));
  }

  pub fn reverse(&mut self, row: Row) {
    self.apply_infallible(Intent::Reverse(row));
  }

  /// For intents with no rejection path.
  fn apply_infallible(&mut self, intent: Intent) {
    let result = self.apply(intent);
    debug_assert!(result.is_ok(), "infallible intent rejected: {result:?}");
  }

  pub fn shift(&mut self, row: Row, direction: ShiftDirection, amount: i64) -> Result<()> {
    self.apply(Intent::Shift {
      row,
      direction,
      amount,
    })
  }

  pub fn width(&self) -> usize {
    self.pair.width()
  }

  pub fn base(&self) -> Base {
    self.pair.base()
  }

  pub fn pair(&self) -> &RegisterPair {
    &self.pair
  }

  pub fn register(&self, row: Row) -> &BitVector {
    self.pair.register(row)
  }

  pub fn bit_display(&self, row: Row, index: usize) -> Result<u8> {
    self.pair.register(row).get(index)
  }

  pub fn numeric_display(&self, row: Row) -> String {
    self.pair.numeric_display(row)
  }

  pub fn is_highlighted(&self, index: usize) -> bool {
    self.pair.is_highlighted(index)
  }

  pub fn comparison_mask(&self) -> ComparisonMask {
    self.pair.comparison_mask()
  }

  pub fn index_order(&self) -> IndexOrder {
    self.order
  }

  pub fn set_index_order(&mut self, order: IndexOrder) {
    tracing::debug!(?order, "index order changed");
    self.order = order;
  }

  pub fn toggle_index_order(&mut self) {
    self.set_index_order(self.order.toggle());
  }

  /// The label shown above bit `index` under the current index order.
  pub fn bit_label(&self, index: usize) -> Result<usize> {
    let width = self.width();
    if index >= width {
      return Err(Error::Index { index, width });
    }
    Ok(self.order.label(index, width))
  }

  /// Value of the bits named by `range_text`, e.g. `"7:0"`.
  pub fn extract_field(&self, row: Row, range_text: &str) -> Result<u128> {
    let range = BitRange::parse(range_text, self.width())?;
    field::extract(self.pair.register(row), &range, self.order)
  }

  /// [`Controller::extract_field`] encoded in the current base.
  pub fn field_display(&self, row: Row, range_text: &str) -> Result<String> {
    self
      .extract_field(row, range_text)
      .map(|value| codec::encode_value(value, self.base()))
  }
}
