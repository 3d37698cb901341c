//! Rendering - turns the register pair into ratatui lines.

use eyre::Result;
use ratatui::{
  style::{
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::Paragraph,
};
use the_bits::Row;

use crate::{
  ctx::{
    Ctx,
    EditTarget,
    Mode,
    StatusLevel,
  },
  terminal::Terminal,
};

/// Registers wider than this wrap onto further blocks.
const BITS_PER_LINE: usize = 32;
const GROUP: usize = 4;

const HELP: &str = "h/l move  j/k row  space toggle  e edit  b base  c clear  i invert  r reverse  \
                    </> shift  s amount  m order  / field  q quit";

pub fn render(ctx: &mut Ctx, terminal: &mut Terminal) -> Result<()> {
  let lines = build_lines(ctx);
  terminal.draw(|frame| {
    frame.render_widget(Paragraph::new(lines), frame.area());
  })
}

fn row_name(row: Row) -> &'static str {
  match row {
    Row::Primary => "A",
    Row::Secondary => "B",
  }
}

pub fn build_lines(ctx: &Ctx) -> Vec<Line<'static>> {
  let controller = &ctx.controller;
  let width = controller.width();
  let cell = (width - 1).to_string().len() + 1;
  let mask = controller.comparison_mask();

  let mut lines = vec![Line::from(format!(
    "the-bits  width {width}  base {}  order {}",
    controller.base(),
    controller.index_order().as_str()
  ))];
  lines.push(Line::default());

  let columns: Vec<usize> = (0..width).collect();
  for chunk in columns.chunks(BITS_PER_LINE) {
    let mut header = vec![Span::raw("   ")];
    for &column in chunk {
      if column % GROUP == 0 && column % BITS_PER_LINE != 0 {
        header.push(Span::raw(" "));
      }
      let label = controller.bit_label(column).unwrap_or(column);
      let style = if mask.get(column) {
        ctx.theme.differing()
      } else {
        ctx.theme.dim()
      };
      header.push(Span::styled(format!("{label:>cell$}"), style));
    }
    lines.push(Line::from(header));

    for row in Row::ALL {
      let marker = if row == ctx.row { ">" } else { " " };
      let mut spans = vec![Span::raw(format!("{marker}{} ", row_name(row)))];
      for &column in chunk {
        if column % GROUP == 0 && column % BITS_PER_LINE != 0 {
          spans.push(Span::raw(" "));
        }
        let bit = controller.bit_display(row, column).unwrap_or(0);
        let mut style = if bit == 1 {
          ctx.theme.set_bit()
        } else {
          Style::default()
        };
        if mask.get(column) {
          style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::raw(" ".repeat(cell - 1)));
        if row == ctx.row && column == ctx.column && ctx.mode == Mode::Normal {
          style = ctx.theme.cursor();
        }
        spans.push(Span::styled(bit.to_string(), style));
      }
      lines.push(Line::from(spans));
    }
    lines.push(Line::default());
  }

  for row in Row::ALL {
    let value = match ctx.mode {
      Mode::Edit(EditTarget::Number(edited)) if edited == row => {
        Span::styled(format!("{}_", ctx.input), ctx.theme.cursor())
      },
      _ => Span::raw(controller.numeric_display(row)),
    };
    let ones = controller.register(row).count_ones();
    lines.push(Line::from(vec![
      Span::raw(format!(" {} = ", row_name(row))),
      value,
      Span::styled(format!("  ({ones} set)"), ctx.theme.dim()),
    ]));
  }
  lines.push(Line::from(vec![
    Span::raw(" differing: "),
    Span::styled(controller.pair().differing_count().to_string(), ctx.theme.differing()),
  ]));
  lines.push(Line::default());

  lines.push(edit_line(ctx, EditTarget::ShiftAmount, "shift", ctx.shift_amount.to_string()));
  lines.push(edit_line(ctx, EditTarget::Range, "field", ctx.range.clone()));
  for row in Row::ALL {
    match ctx.field(row) {
      Some(Ok(value)) => {
        lines.push(Line::from(format!(" {}[{}] = {value}", row_name(row), ctx.range)));
      },
      Some(Err(err)) => {
        let text = format!(" {}[{}]: {err}", row_name(row), ctx.range);
        lines.push(Line::styled(text, ctx.theme.error()));
        break;
      },
      None => {},
    }
  }
  lines.push(Line::default());

  match &ctx.status {
    Some(status) if status.level == StatusLevel::Error => {
      lines.push(Line::styled(format!(" {}", status.text), ctx.theme.error()));
    },
    Some(status) => lines.push(Line::from(format!(" {}", status.text))),
    None => lines.push(Line::default()),
  }
  lines.push(Line::styled(format!(" {HELP}"), ctx.theme.dim()));
  lines
}

fn edit_line(ctx: &Ctx, target: EditTarget, name: &str, current: String) -> Line<'static> {
  let value = if ctx.mode == Mode::Edit(target) {
    Span::styled(format!("{}_", ctx.input), ctx.theme.cursor())
  } else {
    Span::raw(current)
  };
  Line::from(vec![Span::raw(format!(" {name}: ")), value])
}
