//! Edge case tests exercising malformed and unusual inputs end to end.

use crate::token::ItemKind;
use crate::Lexer;

fn kinds(input: &str) -> Vec<ItemKind> {
    let mut lexer = Lexer::new("t", input);
    let mut kinds = Vec::new();
    loop {
        let kind = lexer.next_item().kind;
        kinds.push(kind);
        if kind.is_terminal() {
            break;
        }
    }
    kinds
}

fn items(input: &str) -> Vec<(ItemKind, String)> {
    let mut lexer = Lexer::new("t", input);
    let mut items = Vec::new();
    loop {
        let item = lexer.next_item();
        let terminal = item.kind.is_terminal();
        items.push((item.kind, item.text));
        if terminal {
            break;
        }
    }
    items
}

#[test]
fn test_unbalanced_paren_emits_token_then_error() {
    assert_eq!(
        kinds("<=)=>"),
        vec![ItemKind::LeftDelim, ItemKind::RightParen, ItemKind::Error]
    );
}

#[test]
fn test_balanced_then_extra_paren() {
    assert_eq!(
        kinds("<=())=>"),
        vec![
            ItemKind::LeftDelim,
            ItemKind::LeftParen,
            ItemKind::RightParen,
            ItemKind::RightParen,
            ItemKind::Error,
        ]
    );
}

#[test]
fn test_unterminated_string_in_action() {
    assert_eq!(
        kinds("<= \"oops =>"),
        vec![ItemKind::LeftDelim, ItemKind::Space, ItemKind::Error]
    );
}

#[test]
fn test_newline_inside_action() {
    let items = items("<=a\nb=>");
    assert_eq!(
        items.last(),
        Some(&(ItemKind::Error, "unclosed action".to_string()))
    );
}

#[test]
fn test_input_ends_inside_action() {
    let items = items("<= if x");
    assert_eq!(
        items.last(),
        Some(&(ItemKind::Error, "unclosed action".to_string()))
    );
}

#[test]
fn test_unrecognized_character() {
    let items = items("<=#=>");
    assert_eq!(
        items.last(),
        Some(&(ItemKind::Error, "unrecognized character in action: '#'".to_string()))
    );
}

#[test]
fn test_colon_vs_colon_equal() {
    assert_eq!(
        kinds("<=a:b=>"),
        vec![
            ItemKind::LeftDelim,
            ItemKind::Identifier,
            ItemKind::Colon,
            ItemKind::Identifier,
            ItemKind::RightDelim,
            ItemKind::Eof,
        ]
    );
    assert_eq!(
        kinds("<=a:=b=>"),
        vec![
            ItemKind::LeftDelim,
            ItemKind::Identifier,
            ItemKind::ColonEqual,
            ItemKind::Identifier,
            ItemKind::RightDelim,
            ItemKind::Eof,
        ]
    );
}

#[test]
fn test_multibyte_text_and_positions() {
    let mut lexer = Lexer::new("t", "héllo<=if=>");
    let text = lexer.next_item();
    assert_eq!(text.text, "héllo");
    let delim = lexer.next_item();
    assert_eq!(delim.pos, "héllo".len());
}

#[test]
fn test_lone_left_angle_in_text() {
    let items = items("a < b");
    assert_eq!(items[0], (ItemKind::Text, "a < b".to_string()));
}

#[test]
fn test_delimiter_split_across_nothing() {
    // "<" followed by "=" later is still plain text; only "<=" opens.
    assert_eq!(kinds("a<b=c>d"), vec![ItemKind::Text, ItemKind::Eof]);
}

#[test]
fn test_adjacent_actions() {
    assert_eq!(
        kinds("<=a=><=b=>"),
        vec![
            ItemKind::LeftDelim,
            ItemKind::Identifier,
            ItemKind::RightDelim,
            ItemKind::LeftDelim,
            ItemKind::Identifier,
            ItemKind::RightDelim,
            ItemKind::Eof,
        ]
    );
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_text_is_one_text_item(input in "[^<]{0,64}") {
            let got = kinds(&input);
            if input.is_empty() {
                prop_assert_eq!(got, vec![ItemKind::Eof]);
            } else {
                prop_assert_eq!(got, vec![ItemKind::Text, ItemKind::Eof]);
            }
        }

        #[test]
        fn every_input_yields_exactly_one_terminal(input in ".{0,64}") {
            let mut lexer = Lexer::new("t", input.as_str());
            let mut terminal = None;
            // Generous bound; each item consumes input or terminates.
            for _ in 0..input.len() + 16 {
                let item = lexer.next_item();
                if item.kind.is_terminal() {
                    terminal = Some(item.kind);
                    break;
                }
            }
            prop_assert!(terminal.is_some());
            // The stream stays exhausted afterwards.
            prop_assert_eq!(lexer.next_item().kind, ItemKind::Eof);
        }
    }
}
