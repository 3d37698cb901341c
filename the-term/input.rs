//! Input handling - maps key events to intents.

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};
use the_bits::{
  Intent,
  ShiftDirection,
};

use crate::ctx::{
  Ctx,
  EditTarget,
  Mode,
};

pub fn handle_key(ctx: &mut Ctx, event: KeyEvent) {
  if event.kind == KeyEventKind::Release {
    return;
  }
  if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
    ctx.should_quit = true;
    return;
  }

  match ctx.mode {
    Mode::Normal => handle_normal(ctx, event.code),
    Mode::Edit(_) => handle_edit(ctx, event.code),
  }
}

fn handle_normal(ctx: &mut Ctx, code: KeyCode) {
  let row = ctx.row;
  match code {
    KeyCode::Char('q') | KeyCode::Esc => ctx.should_quit = true,
    KeyCode::Left | KeyCode::Char('h') => ctx.move_left(),
    KeyCode::Right | KeyCode::Char('l') => ctx.move_right(),
    KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => ctx.switch_row(),
    KeyCode::Char('j') | KeyCode::Char('k') => ctx.switch_row(),
    KeyCode::Char(' ') | KeyCode::Enter => ctx.toggle_current_bit(),
    KeyCode::Char('e') => ctx.begin_edit(EditTarget::Number(row)),
    KeyCode::Char('s') => ctx.begin_edit(EditTarget::ShiftAmount),
    KeyCode::Char('/') => ctx.begin_edit(EditTarget::Range),
    KeyCode::Char('b') => ctx.cycle_base(),
    KeyCode::Char('m') => ctx.toggle_index_order(),
    KeyCode::Char('c') => ctx.run(Intent::Clear(row)),
    KeyCode::Char('i') => ctx.run(Intent::Invert(row)),
    KeyCode::Char('r') => ctx.run(Intent::Reverse(row)),
    KeyCode::Char('<') => ctx.shift_current_row(ShiftDirection::Left),
    KeyCode::Char('>') => ctx.shift_current_row(ShiftDirection::Right),
    _ => {},
  }
}

fn handle_edit(ctx: &mut Ctx, code: KeyCode) {
  match code {
    KeyCode::Enter => ctx.commit_edit(),
    KeyCode::Esc => ctx.cancel_edit(),
    KeyCode::Backspace => {
      ctx.input.pop();
      ctx.needs_render = true;
    },
    KeyCode::Char(c) => {
      ctx.input.push(c);
      ctx.needs_render = true;
    },
    _ => {},
  }
}
