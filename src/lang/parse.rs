use super::ast::*;
use super::lex::*;
use super::token::Token;
use super::{Error, Line};
use crate::error;
use crate::mach::MAX_VAR_NAME_LEN;

type Result<T> = std::result::Result<T, Error>;

type Grammar = fn(&Line, &str) -> Result<Command>;

/// Verb table, longest keyword first so no keyword shadows another.
const VERBS: &[(&str, Grammar)] = &[
    ("LIST", list_command),
    ("SAVE", save),
    ("HELP", help),
    ("EXIT", exit),
    ("QUIT", exit),
    ("SUM", sum),
    ("SYB", syb),
    ("INI", ini_command),
    ("LD", load),
    ("ED", edit),
];

/// Command keywords, for completion.
pub fn verbs() -> impl Iterator<Item = &'static str> {
    VERBS.iter().map(|(verb, _)| *verb).chain(Some("$RUN"))
}

/// Classify the leading keyword of a normalized line and parse its arguments.
pub fn parse(line: &Line) -> Result<Command> {
    let text = skip_whitespace(line.text());
    let (token, rest) = next_token(text);
    match token {
        Token::Sigil if starts_with_word(rest, "RUN") => Ok(Command::Run),
        Token::Ident(word) => {
            for (verb, grammar) in VERBS {
                if word.starts_with(verb) {
                    return grammar(line, &text[verb.len()..]);
                }
            }
            Err(error!(UnknownCommand; text))
        }
        Token::Unknown('?') => Ok(Command::Help),
        _ => Err(error!(UnknownCommand; text)),
    }
}

/// Parse one stored program line. Program text is never normalized.
pub fn statement(s: &str) -> Result<Statement> {
    let s = skip_whitespace(s);
    if let Some(rest) = s.strip_prefix("PRINT") {
        Ok(Statement::Print(skip_whitespace(rest).to_string()))
    } else if let Some(rest) = s.strip_prefix("INI") {
        Ok(Statement::Ini(ini(rest)?))
    } else {
        Ok(Statement::Unknown)
    }
}

/// Scan a literal or `$name` reference off the front of `s`.
///
/// Anything else scans as `Expression::Empty` without consuming input.
pub fn expression(s: &str) -> (Expression, &str) {
    let s = skip_whitespace(s);
    match s.chars().next() {
        Some(ch) if is_sigil(ch) => {
            let (name, rest) = split_while(&s[1..], is_ident_char);
            (Expression::Variable(name.to_string()), rest)
        }
        Some(ch) if is_mcl_digit(ch) => {
            let (digits, rest) = split_while(s, is_mcl_digit);
            (Expression::Literal(decimal(digits)), rest)
        }
        _ => (Expression::Empty, s),
    }
}

fn starts_with_word(s: &str, word: &str) -> bool {
    s.get(..word.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(word))
}

fn skip_comma(s: &str) -> &str {
    let s = skip_whitespace(s);
    s.strip_prefix(',').unwrap_or(s)
}

fn operands(s: &str) -> (Expression, Expression) {
    let (a, rest) = expression(s);
    let (b, _) = expression(skip_comma(rest));
    (a, b)
}

fn help(_: &Line, _: &str) -> Result<Command> {
    Ok(Command::Help)
}

fn exit(_: &Line, _: &str) -> Result<Command> {
    Ok(Command::Exit)
}

fn sum(_: &Line, s: &str) -> Result<Command> {
    let (a, b) = operands(s);
    Ok(Command::Sum(a, b))
}

fn syb(_: &Line, s: &str) -> Result<Command> {
    let (a, b) = operands(s);
    Ok(Command::Syb(a, b))
}

fn ini_command(_: &Line, s: &str) -> Result<Command> {
    Ok(Command::Ini(ini(s)?))
}

fn list_command(_: &Line, s: &str) -> Result<Command> {
    Ok(Command::List(list(s)))
}

fn ini(s: &str) -> Result<Ini> {
    let s = skip_whitespace(s);
    let s = match s.strip_prefix('$') {
        Some(s) => s,
        None => return Err(error!(SyntaxError; "Variable name must start with $")),
    };
    let (name, rest) = split_while(s, is_ident_char);
    if name.is_empty() {
        return Err(error!(SyntaxError; "Missing variable name"));
    }
    if name.len() > MAX_VAR_NAME_LEN {
        return Err(error!(SyntaxError; "Variable name too long"));
    }
    let rest = skip_whitespace(rest);
    let value = if rest.is_empty() {
        Expression::Empty
    } else {
        expression(rest).0
    };
    Ok(Ini {
        name: name.to_string(),
        value,
    })
}

fn list_word(s: &str) -> Option<(ListWord, &str)> {
    if starts_with_word(s, "INF") {
        Some((ListWord::Inf, &s[3..]))
    } else if starts_with_word(s, "T") {
        Some((ListWord::T, &s[1..]))
    } else {
        None
    }
}

fn list(s: &str) -> ListArgs {
    let mut args = ListArgs::default();
    let (sigils, mut s) = split_while(skip_whitespace(s), is_sigil);
    args.leading = sigils.len();
    if args.leading > 0 {
        if let Some((word, rest)) = list_word(s) {
            args.word = Some(word);
            s = rest;
        }
    }
    if args.word.is_none() && s.starts_with(is_mcl_digit) {
        let (digits, rest) = split_while(s, is_mcl_digit);
        args.first = Some(decimal(digits));
        s = rest;
    }
    let s = skip_whitespace(skip_comma(s));
    let mut chars = s.chars();
    if chars.next() == Some('$') && !chars.next().map_or(false, is_ident_char) {
        args.trailing_sigil = true;
    } else if let Some((word, _)) =
        list_word(s).filter(|_| args.leading > 0 && args.word.is_none())
    {
        args.word = Some(word);
    } else if !s.is_empty() {
        args.second = Some(expression(s).0);
    }
    args
}

fn load(line: &Line, s: &str) -> Result<Command> {
    let (sigils, s) = split_while(skip_whitespace(s), is_sigil);
    if sigils.len() == 2 {
        let disk = skip_whitespace(skip_comma(s));
        let disk = line.raw_tail(disk).trim_end().to_string();
        return Ok(Command::Load(Load::Disk(disk)));
    }
    let (_, s) = split_while(skip_whitespace(s), is_mcl_digit);
    let s = skip_whitespace(skip_comma(s));
    let s = s.strip_prefix('$').unwrap_or(s);
    let filename = line.raw_tail(s).trim_end().to_string();
    Ok(Command::Load(Load::File(filename)))
}

fn save(line: &Line, s: &str) -> Result<Command> {
    let name = line.raw_tail(skip_whitespace(s)).trim_end();
    if name.is_empty() {
        Ok(Command::Save(None))
    } else {
        Ok(Command::Save(Some(name.to_string())))
    }
}

fn edit(_: &Line, s: &str) -> Result<Command> {
    let msg = "ED requires $NUM<line number>";
    let s = match skip_whitespace(s).strip_prefix('$') {
        Some(s) => s,
        None => return Err(error!(SyntaxError; msg)),
    };
    if !starts_with_word(s, "NUM") {
        return Err(error!(SyntaxError; msg));
    }
    Ok(Command::Edit(expression(&s[3..]).0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(s: &str) -> Result<Command> {
        parse(&Line::new(s))
    }

    fn list_str(s: &str) -> ListArgs {
        match parse_str(s) {
            Ok(Command::List(args)) => args,
            other => panic!("not a LIST: {:?}", other),
        }
    }

    #[test]
    fn test_sum_operands() {
        assert_eq!(
            parse_str("SUM 3,4"),
            Ok(Command::Sum(Expression::Literal(3), Expression::Literal(4)))
        );
        assert_eq!(
            parse_str("sum3 4"),
            Ok(Command::Sum(Expression::Literal(3), Expression::Literal(4)))
        );
        assert_eq!(
            parse_str("SYB $a,"),
            Ok(Command::Syb(
                Expression::Variable("a".into()),
                Expression::Empty
            ))
        );
    }

    #[test]
    fn test_run_is_case_insensitive() {
        assert_eq!(parse_str("$RUN"), Ok(Command::Run));
        assert_eq!(parse_str("$run"), Ok(Command::Run));
        assert!(parse_str("$ RUN").is_err());
    }

    #[test]
    fn test_verbs() {
        let verbs: Vec<&str> = verbs().collect();
        assert!(verbs.contains(&"LIST"));
        assert!(verbs.contains(&"$RUN"));
    }

    #[test]
    fn test_help_and_exit() {
        assert_eq!(parse_str("?"), Ok(Command::Help));
        assert_eq!(parse_str("help"), Ok(Command::Help));
        assert_eq!(parse_str("quit"), Ok(Command::Exit));
        assert_eq!(parse_str("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn test_unknown() {
        let e = parse_str("  frobnicate 1").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UnknownCommand);
        assert_eq!(
            e.to_string(),
            "Unknown command: FROBNICATE 1\nType HELP for available commands"
        );
        let e = parse_str("   ").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_ini() {
        assert_eq!(
            parse_str("ini $count 42"),
            Ok(Command::Ini(Ini {
                name: "count".into(),
                value: Expression::Literal(42)
            }))
        );
        assert_eq!(
            parse_str("INI $A"),
            Ok(Command::Ini(Ini {
                name: "A".into(),
                value: Expression::Empty
            }))
        );
        assert_eq!(
            parse_str("INI COUNT 1").unwrap_err().to_string(),
            "Error: Variable name must start with $"
        );
        assert!(parse_str("INI $ 1").is_err());
        let long = format!("INI ${} 1", "X".repeat(MAX_VAR_NAME_LEN + 1));
        assert!(parse_str(&long).is_err());
    }

    #[test]
    fn test_list_forms() {
        let a = list_str("LIST $INF");
        assert_eq!((a.leading, a.word), (1, Some(ListWord::Inf)));
        let a = list_str("LIST $$,T");
        assert_eq!((a.leading, a.word), (2, Some(ListWord::T)));
        let a = list_str("LIST $$,0");
        assert_eq!(a.second, Some(Expression::Literal(0)));
        let a = list_str("LIST $$");
        assert_eq!((a.leading, a.second.clone()), (2, None));
    }

    #[test]
    fn test_list_sigil_position() {
        let a = list_str("LIST 1,$");
        assert_eq!(a.leading, 0);
        assert_eq!(a.first, Some(1));
        assert!(a.trailing_sigil);
        let a = list_str("LIST $,1");
        assert_eq!(a.leading, 1);
        assert_eq!(a.first, None);
        assert!(!a.trailing_sigil);
        assert_eq!(a.second, Some(Expression::Literal(1)));
    }

    #[test]
    fn test_list_word_after_sigils_only() {
        let a = list_str("LIST T");
        assert_eq!(a.word, None);
        assert_eq!(a.second, Some(Expression::Empty));
        let a = list_str("LIST 1,INF");
        assert_eq!((a.first, a.word), (Some(1), None));
        let a = list_str("LIST $,INF");
        assert_eq!(a.word, Some(ListWord::Inf));
    }

    #[test]
    fn test_list_second_variable() {
        let a = list_str("LIST $,$two");
        assert!(!a.trailing_sigil);
        assert_eq!(a.second, Some(Expression::Variable("two".into())));
    }

    #[test]
    fn test_load_forms() {
        assert_eq!(
            parse_str("LD 0,$Prog.mcl"),
            Ok(Command::Load(Load::File("Prog.mcl".into())))
        );
        assert_eq!(
            parse_str("ld hello.txt "),
            Ok(Command::Load(Load::File("hello.txt".into())))
        );
        assert_eq!(
            parse_str("LD $$,floppy"),
            Ok(Command::Load(Load::Disk("floppy".into())))
        );
    }

    #[test]
    fn test_save_forms() {
        assert_eq!(parse_str("SAVE"), Ok(Command::Save(None)));
        assert_eq!(
            parse_str("save Keep.sav"),
            Ok(Command::Save(Some("Keep.sav".into())))
        );
    }

    #[test]
    fn test_edit() {
        assert_eq!(
            parse_str("ED $NUM20"),
            Ok(Command::Edit(Expression::Literal(20)))
        );
        assert_eq!(
            parse_str("ed $num 30"),
            Ok(Command::Edit(Expression::Literal(30)))
        );
        assert!(parse_str("ED 20").is_err());
        assert!(parse_str("ED $LINE20").is_err());
    }

    #[test]
    fn test_statement() {
        assert_eq!(
            statement("PRINT   HELLO world"),
            Ok(Statement::Print("HELLO world".into()))
        );
        assert_eq!(
            statement("INI $x 5"),
            Ok(Statement::Ini(Ini {
                name: "x".into(),
                value: Expression::Literal(5)
            }))
        );
        assert_eq!(statement("print hi"), Ok(Statement::Unknown));
        assert!(statement("INI x").is_err());
    }
}
