//! REPL 单元测试
//!
//! 命令处理、补全与结果输出

use crate::backends::repl::commands::{describe_words, CommandHandler, CommandResult};
use crate::backends::repl::completer::WordCompleter;
use crate::backends::repl::paint::{evaluate_line, paint, value_color};
use crate::backends::repl::LineREPLConfig;
use crate::frontend::markup::Color;
use crate::runtime::{Interpreter, Value};
use crate::util::config::ReplConfig;

fn output(result: CommandResult) -> String {
    match result {
        CommandResult::Output(text) => text,
        other => panic!("expected output, got {:?}", other),
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_quit_aliases() {
        let mut interp = Interpreter::new();
        let mut handler = CommandHandler::new(&mut interp);
        assert_eq!(handler.handle(":quit"), CommandResult::Exit);
        assert_eq!(handler.handle(":q"), CommandResult::Exit);
        assert_eq!(handler.handle(":exit"), CommandResult::Exit);
    }

    #[test]
    fn test_bare_colon_continues() {
        let mut interp = Interpreter::new();
        assert_eq!(CommandHandler::new(&mut interp).handle(":"), CommandResult::Continue);
    }

    #[test]
    fn test_unknown_command() {
        let mut interp = Interpreter::new();
        let text = output(CommandHandler::new(&mut interp).handle(":frobnicate"));
        assert_eq!(text, "Unknown command: :frobnicate");
    }

    #[test]
    fn test_help_lists_commands() {
        let mut interp = Interpreter::new();
        let text = output(CommandHandler::new(&mut interp).handle(":help"));
        assert!(text.contains(":quit"));
        assert!(text.contains(":words"));
    }

    #[test]
    fn test_stack_and_register() {
        let mut interp = Interpreter::new();
        interp.execute("7 >R 1 2");
        let mut handler = CommandHandler::new(&mut interp);
        assert_eq!(output(handler.handle(":stack")), "1\n2");
        assert_eq!(output(handler.handle(":r")), "7");
    }

    #[test]
    fn test_empty_register_and_stack() {
        let mut interp = Interpreter::new();
        let mut handler = CommandHandler::new(&mut interp);
        assert_eq!(output(handler.handle(":s")), "Stack empty");
        assert_eq!(output(handler.handle(":register")), "Register empty");
    }

    #[test]
    fn test_env_lists_definitions_in_order() {
        let mut interp = Interpreter::new();
        assert_eq!(
            output(CommandHandler::new(&mut interp).handle(":env")),
            "No user-defined words"
        );
        interp.execute("[ DUP * ] \"SQUARE\" DEF [ 1 + ] \"INC\" DEF");
        assert_eq!(
            output(CommandHandler::new(&mut interp).handle(":e")),
            "SQUARE = [ DUP * ]\nINC = [ 1 + ]"
        );
    }

    #[test]
    fn test_reset_command() {
        let mut interp = Interpreter::new();
        interp.execute("[ 1 ] \"ONE\" DEF 5 >R");
        assert_eq!(output(CommandHandler::new(&mut interp).handle(":reset")), "Session reset");
        assert!(interp.environment().is_empty());
        assert_eq!(interp.register(), None);
    }

    #[test]
    fn test_words_filter() {
        let mut interp = Interpreter::new();
        let text = output(CommandHandler::new(&mut interp).handle(":words REV"));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("REVERSE"));
        assert_eq!(text, describe_words(Some("REV")));
    }

    #[test]
    fn test_describe_all_words() {
        assert_eq!(describe_words(None).lines().count(), 25);
    }
}

#[cfg(test)]
mod completer_tests {
    use super::*;

    fn completer() -> WordCompleter {
        WordCompleter::new(Interpreter::new().words())
    }

    #[test]
    fn test_prefix_completion() {
        let (start, matches) = completer().candidates("1 2 SW", 6);
        assert_eq!(start, 4);
        assert_eq!(matches, vec!["SWAP".to_string()]);
    }

    #[test]
    fn test_lowercase_prefix_is_uppercased() {
        let (_, matches) = completer().candidates("rev", 3);
        assert_eq!(matches, vec!["REVERSE".to_string()]);
    }

    #[test]
    fn test_completion_inside_vector() {
        let (start, matches) = completer().candidates("[DU", 3);
        assert_eq!(start, 1);
        assert_eq!(matches, vec!["DUP".to_string()]);
    }

    #[test]
    fn test_register_words() {
        let (_, matches) = completer().candidates(">", 1);
        assert!(matches.contains(&">R".to_string()));
        assert!(matches.contains(&">=".to_string()));
    }

    #[test]
    fn test_empty_prefix_has_no_candidates() {
        let (start, matches) = completer().candidates("1 2 ", 4);
        assert_eq!(start, 4);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_multibyte_boundary() {
        let line = "二乗 DE";
        let (start, matches) = completer().candidates(line, line.len());
        assert_eq!(&line[start..], "DE");
        assert!(matches.contains(&"DEF".to_string()));
        assert!(matches.contains(&"DEL".to_string()));
    }

    #[test]
    fn test_set_words_picks_up_definitions() {
        let mut interp = Interpreter::new();
        let mut completer = WordCompleter::new(interp.words());
        interp.execute("[ 1 ] \"SQUARE_ONE\" DEF");
        completer.set_words(interp.words());
        let (_, matches) = completer.candidates("SQ", 2);
        assert_eq!(matches, vec!["SQUARE_ONE".to_string()]);
    }
}

#[cfg(test)]
mod paint_tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut interp = Interpreter::new();
        assert_eq!(evaluate_line(&mut interp, "1/3 1/6 +", false), "1/2");
        assert_eq!(evaluate_line(&mut interp, "5 0 /", false), "Error: Division by zero");
        assert_eq!(evaluate_line(&mut interp, "", false), "Empty input");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let mut interp = Interpreter::new();
        let line = evaluate_line(&mut interp, "1 TRUE", true);
        assert!(line.contains('1'));
        assert!(line.contains("true"));
        assert!(line.contains("\u{1b}["));
    }

    #[test]
    fn test_colored_empty_stack_is_plain() {
        let mut interp = Interpreter::new();
        assert_eq!(evaluate_line(&mut interp, "1 DROP", true), "Stack empty");
    }

    #[test]
    fn test_value_colors_follow_input_palette() {
        assert_eq!(value_color(&Value::Boolean(true)), Color::Cyan);
        assert_eq!(value_color(&Value::String("x".into())), Color::Blue);
        assert_eq!(value_color(&Value::Nil), Color::Orange);
        assert_eq!(value_color(&Value::Vector(vec![])), Color::Purple);
    }

    #[test]
    fn test_paint_uses_truecolor() {
        assert_eq!(paint("x", Color::Red), "\u{1b}[38;2;255;75;0mx\u{1b}[39m");
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_line_config_from_repl_config() {
        let config: LineREPLConfig = ReplConfig {
            prompt: "> ".to_string(),
            vi_mode: true,
            ..ReplConfig::default()
        }
        .into();
        assert_eq!(config.prompt, "> ");
        assert!(config.vi_mode);
        assert_eq!(config.history_size, ReplConfig::default().history_size);
    }
}
