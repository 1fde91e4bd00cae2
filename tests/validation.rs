//! Statement-level checks run through the public `tokenize` + `validate` pipeline.

use rstest::rstest;
use sqlbyte::{tokenize, validate, GroupError, StatementKind, TokenType, ValidationError};

fn check(line: &str) -> Result<(), ValidationError> {
    validate(&tokenize(line))
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("select * from users")]
#[case("SELECT * FROM users")]
#[case("select a , b from users")]
#[case("select a,b from users ;")]
#[case("insert into users values ( 1 , bob )")]
#[case("insert into users ( id , name ) values ( 1 , bob )")]
#[case("INSERT INTO users ( id ) VALUES ( 1 ) ;")]
fn accepted(#[case] line: &str) {
    assert_eq!(check(line), Ok(()));
}

#[rstest]
#[case("select * ", "not enough tokens for FROM clause")]
#[case("select * from", "not enough tokens for FROM clause")]
#[case("select a , b", "reached end of tokens prematurely")]
#[case("select", "reached end of tokens prematurely")]
fn malformed_select(#[case] line: &str, #[case] defect: &'static str) {
    assert_eq!(check(line), Err(ValidationError::MalformedSelect(defect)));
}

#[rstest]
#[case("insert into users ( id , name ) ( 1 , bob )", "missing VALUES keyword")]
#[case("insert users values ( 1 )", "does not start with INSERT INTO")]
#[case("insert into users ( id ) vals ( 1 )", "missing VALUES keyword")]
fn malformed_insert(#[case] line: &str, #[case] defect: &'static str) {
    assert_eq!(check(line), Err(ValidationError::MalformedInsert(defect)));
}

#[rstest]
#[case("insert into users ( ) values ( 1 )", GroupError::EmptyGroup)]
#[case("insert into users ( id ) values ( )", GroupError::EmptyGroup)]
#[case("insert into users values 1 , bob", GroupError::MissingOpenGroup)]
#[case("insert into users values ( 1 , bob", GroupError::MissingCloseGroup)]
fn malformed_group(#[case] line: &str, #[case] defect: GroupError) {
    assert_eq!(
        check(line),
        Err(ValidationError::Group {
            statement: StatementKind::Insert,
            source: defect,
        })
    );
}

#[rstest]
#[case("delete from users", TokenType::Unknown)]
#[case("from users", TokenType::From)]
#[case("( select * from users )", TokenType::OpenGroup)]
fn unsupported(#[case] line: &str, #[case] kind: TokenType) {
    match check(line) {
        Err(ValidationError::UnsupportedStatement { kind: found, lexeme }) => {
            assert_eq!(found, kind);
            assert_eq!(lexeme, line.split_whitespace().next().unwrap());
        }
        other => panic!("expected UnsupportedStatement, got {other:?}"),
    }
}

#[test]
fn empty_group_message() {
    let err = check("insert into users ( ) values ( 1 )").unwrap_err();
    assert_eq!(err.group_error(), Some(GroupError::EmptyGroup));
    assert_eq!(err.to_string(), "Malformed INSERT statement: empty group");
}

#[test]
fn glued_parentheses_are_not_groups() {
    // `(1,bob)` is a single UNKNOWN word
    assert_eq!(
        check("insert into users values (1,bob)"),
        Err(ValidationError::Group {
            statement: StatementKind::Insert,
            source: GroupError::MissingOpenGroup,
        })
    );
}
