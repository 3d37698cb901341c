use the_bits::{
  Base,
  BitVector,
  Controller,
  Error,
  Intent,
  RegisterConfig,
  Row,
  ShiftDirection,
  codec,
  shift,
};

fn controller(width: usize) -> Controller {
  Controller::new(&RegisterConfig {
    width,
    ..Default::default()
  })
  .unwrap()
}

fn bits(text: &str) -> Vec<u8> {
  text.bytes().map(|b| b - b'0').collect()
}

fn load(ctl: &mut Controller, row: Row, pattern: &str) {
  for (index, bit) in bits(pattern).into_iter().enumerate() {
    if ctl.bit_display(row, index).unwrap() != bit {
      ctl.toggle_bit(row, index).unwrap();
    }
  }
}

/// Decodes an arbitrary intent from raw quickcheck input.
fn intent_from(op: u8, arg: u8, amount: u8, width: usize) -> Intent {
  let row = if arg & 1 == 0 {
    Row::Primary
  } else {
    Row::Secondary
  };
  match op % 8 {
    0 | 1 => Intent::ToggleBit {
      row,
      // some indices fall past the register
      index: arg as usize % (width + 4),
    },
    2 => Intent::CommitNumericText {
      row,
      text: format!("{:x}", amount),
    },
    3 => Intent::ChangeBase(Base::ALL[arg as usize % 3]),
    4 => Intent::Clear(row),
    5 => Intent::Invert(row),
    6 => Intent::Reverse(row),
    _ => Intent::Shift {
      row,
      direction: if amount & 1 == 0 {
        ShiftDirection::Left
      } else {
        ShiftDirection::Right
      },
      amount: (amount % 5) as i64,
    },
  }
}

#[test]
fn mask_scenario_from_hex_values() {
  let mut ctl = controller(4);
  ctl.commit_numeric_text(Row::Primary, "0xA").unwrap();
  ctl.commit_numeric_text(Row::Secondary, "0x2").unwrap();
  assert_eq!(ctl.register(Row::Primary).to_string(), "1010");
  assert_eq!(ctl.register(Row::Secondary).to_string(), "0010");
  assert_eq!(ctl.comparison_mask().as_slice(), &[
    true, false, false, false
  ]);
}

#[test]
fn invert_scenario() {
  let mut ctl = controller(4);
  load(&mut ctl, Row::Primary, "0110");
  ctl.apply(Intent::Invert(Row::Primary)).unwrap();
  assert_eq!(ctl.register(Row::Primary).to_string(), "1001");
  assert_eq!(ctl.numeric_display(Row::Primary), "0x9");
}

#[test]
fn reverse_scenario() {
  let mut ctl = controller(4);
  load(&mut ctl, Row::Secondary, "0001");
  ctl.apply(Intent::Reverse(Row::Secondary)).unwrap();
  assert_eq!(ctl.register(Row::Secondary).to_string(), "1000");
}

#[test]
fn decode_scenarios() {
  assert_eq!(
    codec::decode("0xFF", Base::Hex, 8).map(|v| v.to_string()),
    Ok("11111111".to_string())
  );
  assert_eq!(
    codec::decode("0xFF", Base::Hex, 4),
    Err(Error::Overflow { width: 4 })
  );
}

#[test]
fn left_shift_overflow_scenario() {
  let v = BitVector::from_bits(&bits("1000")).unwrap();
  assert_eq!(
    shift::shift(&v, 1, ShiftDirection::Left),
    Err(Error::Overflow { width: 4 })
  );

  let mut ctl = controller(4);
  load(&mut ctl, Row::Primary, "1000");
  assert_eq!(
    ctl.apply(Intent::Shift {
      row:       Row::Primary,
      direction: ShiftDirection::Left,
      amount:    1,
    }),
    Err(Error::Overflow { width: 4 })
  );
  assert_eq!(ctl.register(Row::Primary).to_string(), "1000");
  assert_eq!(ctl.numeric_display(Row::Primary), "0x8");
}

#[test]
fn out_of_range_toggle_is_rejected() {
  let mut ctl = controller(4);
  load(&mut ctl, Row::Secondary, "0110");
  let before = ctl.pair().clone();
  assert_eq!(
    ctl.apply(Intent::ToggleBit {
      row:   Row::Secondary,
      index: 4,
    }),
    Err(Error::Index { index: 4, width: 4 })
  );
  assert_eq!(ctl.pair(), &before);
  assert_eq!(ctl.comparison_mask(), before.comparison_mask());
}

#[test]
fn failed_commit_does_not_fall_back_to_zero() {
  let mut ctl = controller(32);
  ctl.commit_numeric_text(Row::Primary, "0xdeadbeef").unwrap();
  assert!(ctl.commit_numeric_text(Row::Primary, "0xdeadbeefff").is_err());
  assert!(ctl.commit_numeric_text(Row::Primary, "hello").is_err());
  assert_eq!(ctl.numeric_display(Row::Primary), "0xdeadbeef");
}

#[test]
fn default_session() {
  let ctl = Controller::new(&RegisterConfig::default()).unwrap();
  assert_eq!(ctl.width(), 32);
  assert_eq!(ctl.base(), Base::Hex);
  assert_eq!(ctl.bit_label(0), Ok(31));
}

quickcheck::quickcheck! {
  fn mask_tracks_every_intent_sequence(ops: Vec<(u8, u8, u8)>) -> bool {
    let width = 8;
    let mut ctl = controller(width);
    ops.into_iter().all(|(op, arg, amount)| {
      let before = ctl.pair().clone();
      let result = ctl.apply(intent_from(op, arg, amount, width));
      let unchanged_on_error = result.is_ok() || ctl.pair() == &before;
      let mask = ctl.comparison_mask();
      let consistent = (0..width).all(|i| {
        let a = ctl.bit_display(Row::Primary, i).unwrap();
        let b = ctl.bit_display(Row::Secondary, i).unwrap();
        mask.get(i) == (a != b) && ctl.is_highlighted(i) == (a != b)
      });
      unchanged_on_error && consistent
    })
  }

  fn change_base_keeps_values(primary: u16, secondary: u16, base: u8) -> bool {
    let mut ctl = controller(16);
    ctl.commit_numeric_text(Row::Primary, format!("{primary:#x}")).unwrap();
    ctl.commit_numeric_text(Row::Secondary, format!("{secondary:#x}")).unwrap();
    ctl.change_base(Base::ALL[base as usize % 3]);
    ctl.register(Row::Primary).to_integer() == primary as u128
      && ctl.register(Row::Secondary).to_integer() == secondary as u128
  }
}
