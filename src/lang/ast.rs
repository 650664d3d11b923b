#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Sum(Expression, Expression),
    Syb(Expression, Expression),
    Ini(Ini),
    List(ListArgs),
    Load(Load),
    Save(Option<String>),
    Edit(Expression),
    Run,
    Help,
    Exit,
}

/// Reduced grammar used for lines of a loaded program.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Print(String),
    Ini(Ini),
    Unknown,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(i32),
    Variable(String),
    Empty,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ini {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Load {
    File(String),
    Disk(String),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ListWord {
    Inf,
    T,
}

/// ## Positional arguments of `LIST`
///
/// `leading` counts the sigils before the first parameter and
/// `trailing_sigil` records a bare `$` after the comma. The two are kept
/// apart because `LIST 1,$` and `LIST $,1` ask for different reports.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ListArgs {
    pub leading: usize,
    pub word: Option<ListWord>,
    pub first: Option<i32>,
    pub trailing_sigil: bool,
    pub second: Option<Expression>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ListReport {
    Info,
    Variables,
    ProgramLines,
    Programs,
    Directories,
    Mounts,
    Libraries,
    Usage,
}

impl ListReport {
    /// First matching row wins. `second` is the evaluated second parameter.
    pub fn resolve(args: &ListArgs, second: Option<i32>) -> ListReport {
        use ListReport::*;
        match args.word {
            Some(ListWord::Inf) => return Info,
            Some(ListWord::T) => return Variables,
            None => {}
        }
        match (args.leading, args.first, args.trailing_sigil, second) {
            (2, _, _, Some(0)) => ProgramLines,
            (2, _, false, None) => Programs,
            (0, Some(1), true, _) => Directories,
            (1, None, _, Some(1)) => Mounts,
            (1, _, _, Some(2)) => Libraries,
            _ => Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(leading: usize, first: Option<i32>, trailing_sigil: bool) -> ListArgs {
        ListArgs {
            leading,
            first,
            trailing_sigil,
            ..ListArgs::default()
        }
    }

    #[test]
    fn test_word_rows_win() {
        let mut a = args(2, None, false);
        a.word = Some(ListWord::T);
        assert_eq!(ListReport::resolve(&a, Some(0)), ListReport::Variables);
        a.word = Some(ListWord::Inf);
        assert_eq!(ListReport::resolve(&a, Some(0)), ListReport::Info);
    }

    #[test]
    fn test_directories_need_sigil_after_one() {
        let a = args(0, Some(1), true);
        assert_eq!(ListReport::resolve(&a, None), ListReport::Directories);
        let a = args(1, Some(1), false);
        assert_eq!(ListReport::resolve(&a, None), ListReport::Usage);
    }

    #[test]
    fn test_mounts_need_sigil_before_one() {
        let a = args(1, None, false);
        assert_eq!(ListReport::resolve(&a, Some(1)), ListReport::Mounts);
        let a = args(0, None, false);
        assert_eq!(ListReport::resolve(&a, Some(1)), ListReport::Usage);
    }

    #[test]
    fn test_double_sigil_rows() {
        let a = args(2, None, false);
        assert_eq!(ListReport::resolve(&a, Some(0)), ListReport::ProgramLines);
        assert_eq!(ListReport::resolve(&a, None), ListReport::Programs);
        assert_eq!(ListReport::resolve(&a, Some(5)), ListReport::Usage);
    }

    #[test]
    fn test_libraries() {
        let a = args(1, None, false);
        assert_eq!(ListReport::resolve(&a, Some(2)), ListReport::Libraries);
    }
}
