//! Application context (state).

use the_bits::{
  Controller,
  Intent,
  Row,
  ShiftDirection,
};

use crate::theme::Theme;

pub const DEFAULT_SHIFT_AMOUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
  Info,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
  pub level: StatusLevel,
  pub text:  String,
}

/// What a line of text typed by the user will be committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
  Number(Row),
  ShiftAmount,
  Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Normal,
  Edit(EditTarget),
}

pub struct Ctx {
  pub controller:   Controller,
  pub theme:        Theme,
  pub row:          Row,
  pub column:       usize,
  pub mode:         Mode,
  pub input:        String,
  pub shift_amount: i64,
  pub range:        String,
  pub status:       Option<Status>,
  pub should_quit:  bool,
  pub needs_render: bool,
}

impl Ctx {
  pub fn new(controller: Controller, theme: Theme) -> Self {
    Self {
      controller,
      theme,
      row: Row::Primary,
      column: 0,
      mode: Mode::Normal,
      input: String::new(),
      shift_amount: DEFAULT_SHIFT_AMOUNT,
      range: String::new(),
      status: None,
      should_quit: false,
      needs_render: true,
    }
  }

  pub fn move_left(&mut self) {
    self.column = self.column.saturating_sub(1);
    self.needs_render = true;
  }

  pub fn move_right(&mut self) {
    self.column = (self.column + 1).min(self.controller.width() - 1);
    self.needs_render = true;
  }

  pub fn switch_row(&mut self) {
    self.row = self.row.other();
    self.needs_render = true;
  }

  /// Applies `intent`, reporting a rejection in the status line.
  pub fn run(&mut self, intent: Intent) {
    match self.controller.apply(intent) {
      Ok(()) => self.status = None,
      Err(err) => {
        log::warn!("{err}");
        self.set_error(err.to_string());
      },
    }
    self.needs_render = true;
  }

  pub fn toggle_current_bit(&mut self) {
    self.run(Intent::ToggleBit {
      row:   self.row,
      index: self.column,
    });
  }

  pub fn shift_current_row(&mut self, direction: ShiftDirection) {
    self.run(Intent::Shift {
      row: self.row,
      direction,
      amount: self.shift_amount,
    });
  }

  pub fn cycle_base(&mut self) {
    let base = self.controller.base().next();
    self.run(Intent::ChangeBase(base));
    self.set_info(format!("base: {base}"));
  }

  pub fn toggle_index_order(&mut self) {
    self.controller.toggle_index_order();
    self.needs_render = true;
  }

  pub fn begin_edit(&mut self, target: EditTarget) {
    self.input = match target {
      EditTarget::Number(row) => self.controller.numeric_display(row),
      EditTarget::ShiftAmount => self.shift_amount.to_string(),
      EditTarget::Range => self.range.clone(),
    };
    self.mode = Mode::Edit(target);
    self.needs_render = true;
  }

  pub fn cancel_edit(&mut self) {
    self.input.clear();
    self.mode = Mode::Normal;
    self.needs_render = true;
  }

  pub fn commit_edit(&mut self) {
    let Mode::Edit(target) = self.mode else {
      return;
    };
    let text = std::mem::take(&mut self.input);
    self.mode = Mode::Normal;

    match target {
      EditTarget::Number(row) => self.run(Intent::CommitNumericText { row, text }),
      EditTarget::ShiftAmount => self.commit_shift_amount(&text),
      EditTarget::Range => {
        self.range = text.trim().to_string();
        self.status = None;
      },
    }
    self.needs_render = true;
  }

  /// Keeps the previous amount when `text` is not a non-negative integer.
  fn commit_shift_amount(&mut self, text: &str) {
    match text.trim().parse::<i64>() {
      Ok(amount) if amount >= 0 => {
        self.shift_amount = amount;
        self.status = None;
      },
      _ => {
        log::warn!("rejected shift amount {text:?}");
        self.set_error(format!(
          "invalid shift amount {text:?}, keeping {}",
          self.shift_amount
        ));
      },
    }
  }

  pub fn set_info(&mut self, text: impl Into<String>) {
    self.status = Some(Status {
      level: StatusLevel::Info,
      text:  text.into(),
    });
  }

  pub fn set_error(&mut self, text: impl Into<String>) {
    self.status = Some(Status {
      level: StatusLevel::Error,
      text:  text.into(),
    });
  }

  /// Field analysis for `row`, or `None` while no range is entered.
  pub fn field(&self, row: Row) -> Option<Result<String, the_bits::Error>> {
    if self.range.is_empty() {
      return None;
    }
    Some(self.controller.field_display(row, &self.range))
  }
}
