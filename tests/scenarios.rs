// tests/scenarios.rs
use std::collections::HashMap;

use plateau_rover::{
    Direction, Instruction, Plateau, Position, RoverConfig, RoverError, RoverInterpreter,
    RoverState,
};

fn setup(max_x: i32, max_y: i32) -> (RoverInterpreter, Plateau) {
    (RoverInterpreter::default(), Plateau::new(max_x, max_y).unwrap())
}

#[test]
fn test_scenario_loop_back_north() {
    let (interpreter, plateau) = setup(5, 5);
    let end = interpreter
        .run(RoverState::new(1, 2, Direction::North), "LMLMLMLMM", &plateau)
        .unwrap();
    assert_eq!(end, RoverState::new(1, 3, Direction::North));
}

#[test]
fn test_scenario_clamped_at_east_edge() {
    let (interpreter, plateau) = setup(5, 5);
    // MM: (4,3) then (5,3). R -> S, MM: (5,1). R -> W, M: (4,1). RR -> E, M: (5,1).
    let end = interpreter
        .run(RoverState::new(3, 3, Direction::East), "MMRMMRMRRM", &plateau)
        .unwrap();
    assert_eq!(end, RoverState::new(5, 1, Direction::East));
}

#[test]
fn test_scenario_invalid_instruction() {
    let (interpreter, plateau) = setup(10, 15);
    let result = interpreter.run(RoverState::new(4, 6, Direction::South), "LLMMMRRLV", &plateau);
    assert_eq!(result, Err(RoverError::InvalidInstruction('V')));
}

#[test]
fn test_scenario_out_of_bounds_start() {
    let (interpreter, plateau) = setup(10, 15);
    // The invalid symbol is never reached: the start check runs first.
    let result = interpreter.run(RoverState::new(11, 0, Direction::North), "V", &plateau);
    assert_eq!(
        result,
        Err(RoverError::OutOfBoundsStart(Position::new(11, 0)))
    );

    let result = interpreter.run(RoverState::new(0, -1, Direction::North), "", &plateau);
    assert_eq!(
        result,
        Err(RoverError::OutOfBoundsStart(Position::new(0, -1)))
    );
}

#[test]
fn test_empty_instructions_keep_pose() {
    let (interpreter, plateau) = setup(3, 3);
    let start = RoverState::new(3, 0, Direction::West);
    assert_eq!(interpreter.run(start, "", &plateau), Ok(start));
}

#[test]
fn test_stops_at_first_invalid_symbol() {
    let (interpreter, plateau) = setup(5, 5);
    let start = RoverState::new(0, 0, Direction::North);
    assert_eq!(
        interpreter.run(start, "MxMq", &plateau),
        Err(RoverError::InvalidInstruction('x'))
    );
    // Lowercase is not recognized by default.
    assert_eq!(
        interpreter.run(start, "m", &plateau),
        Err(RoverError::InvalidInstruction('m'))
    );
}

#[test]
fn test_trace_records_every_pose() {
    let (interpreter, plateau) = setup(2, 2);
    let start = RoverState::new(0, 0, Direction::North);
    let trace = interpreter.run_traced(start, "MMMRM", &plateau).unwrap();

    assert_eq!(
        trace,
        vec![
            start,
            RoverState::new(0, 1, Direction::North),
            RoverState::new(0, 2, Direction::North),
            RoverState::new(0, 2, Direction::North), // clamped
            RoverState::new(0, 2, Direction::East),
            RoverState::new(1, 2, Direction::East),
        ]
    );
    assert!(trace.iter().all(|s| plateau.contains(s.position)));
    assert_eq!(
        trace.last().copied(),
        interpreter.run(start, "MMMRM", &plateau).ok()
    );
}

#[test]
fn test_case_insensitive_config() {
    let mut interpreter = RoverInterpreter::new(RoverConfig {
        case_insensitive: true,
    });
    interpreter.populate_standard_symbols();
    let plateau = Plateau::new(5, 5).unwrap();

    let end = interpreter
        .run(RoverState::new(1, 2, Direction::North), "lmlmlmlmm", &plateau)
        .unwrap();
    assert_eq!(end, RoverState::new(1, 3, Direction::North));
}

#[test]
fn test_custom_symbol_map() {
    let mut interpreter = RoverInterpreter::new(RoverConfig::default());
    interpreter.set_op('<', Instruction::Left);
    interpreter.set_op('>', Instruction::Right);
    interpreter.set_op('^', Instruction::Move);
    let plateau = Plateau::new(5, 5).unwrap();

    let end = interpreter
        .run(RoverState::new(0, 0, Direction::North), "^>^^", &plateau)
        .unwrap();
    assert_eq!(end, RoverState::new(2, 1, Direction::East));

    // The standard letters are not registered on this interpreter.
    assert_eq!(
        interpreter.run(RoverState::new(0, 0, Direction::North), "M", &plateau),
        Err(RoverError::InvalidInstruction('M'))
    );
}

#[test]
fn test_case_folding_never_substitutes_symbols() {
    let mut interpreter = RoverInterpreter::new(RoverConfig {
        case_insensitive: true,
    });
    interpreter.set_op('S', Instruction::Move);
    let plateau = Plateau::new(5, 5).unwrap();
    let start = RoverState::new(0, 0, Direction::North);

    // 'ß' uppercases to "SS", which is not a single mapped symbol.
    assert_eq!(
        interpreter.run(start, "ß", &plateau),
        Err(RoverError::InvalidInstruction('ß'))
    );
    assert_eq!(interpreter.decode('s'), Some(Instruction::Move));
}

#[test]
fn test_with_map_replaces_symbols() {
    let map = HashMap::from([
        ('a', Instruction::Left),
        ('d', Instruction::Right),
        ('w', Instruction::Move),
    ]);
    let mut interpreter = RoverInterpreter::default().with_map(map);
    let plateau = Plateau::new(5, 5).unwrap();
    let start = RoverState::new(2, 2, Direction::North);

    let end = interpreter.run(start, "wdw", &plateau).unwrap();
    assert_eq!(end, RoverState::new(3, 3, Direction::East));
    // The standard symbols were replaced, not merged.
    assert_eq!(interpreter.decode('M'), None);

    interpreter.set_op('M', Instruction::Move);
    assert_eq!(interpreter.decode('M'), Some(Instruction::Move));
}
