//! Selection movement over a list that may contain separators.

use super::item::MenuEntry;
use crate::keys::KeyCommand;

fn is_item(entries: &[MenuEntry], index: usize) -> bool {
    entries.get(index).is_some_and(|entry| !entry.is_separator())
}

/// First item at or after `from`.
fn skip_forward(entries: &[MenuEntry], from: usize) -> Option<usize> {
    (from..entries.len()).find(|&idx| is_item(entries, idx))
}

/// Last item at or before `from`.
fn skip_backward(entries: &[MenuEntry], from: usize) -> Option<usize> {
    (0..=from.min(entries.len().checked_sub(1)?))
        .rev()
        .find(|&idx| is_item(entries, idx))
}

/// Index of the first item flagged `selected`, else the first item.
pub fn initial_index(entries: &[MenuEntry]) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.as_item().is_some_and(|item| item.selected))
        .or_else(|| skip_forward(entries, 0))
}

/// First item whose hotkey matches exactly, else the first case-insensitive match.
pub fn find_hotkey(entries: &[MenuEntry], key: char) -> Option<usize> {
    let hotkey_at = |idx: usize| entries[idx].as_item().and_then(|item| item.hotkey);
    (0..entries.len())
        .find(|&idx| hotkey_at(idx) == Some(key))
        .or_else(|| {
            (0..entries.len()).find(|&idx| {
                hotkey_at(idx).is_some_and(|hotkey| hotkey.to_lowercase().eq(key.to_lowercase()))
            })
        })
}

/// Where a navigation command moves the selection, if anywhere.
///
/// Returns `None` when the command does not navigate or the selection is
/// already at the relevant end.
pub fn navigate(
    entries: &[MenuEntry],
    current: usize,
    command: KeyCommand,
    page_size: usize,
) -> Option<usize> {
    let last = entries.len().checked_sub(1)?;
    let target = match command {
        KeyCommand::Down => skip_forward(entries, current + 1),
        KeyCommand::Up => skip_backward(entries, current.checked_sub(1)?),
        KeyCommand::PageUp if current > 0 => {
            let jump = if page_size == 0 {
                0
            } else {
                current.saturating_sub(page_size)
            };
            skip_forward(entries, jump)
        }
        KeyCommand::PageDown if current < last => {
            let jump = if page_size == 0 {
                last
            } else {
                (current + page_size).min(last)
            };
            skip_backward(entries, jump)
        }
        KeyCommand::Home => skip_forward(entries, 0),
        KeyCommand::End => skip_backward(entries, last),
        _ => None,
    };
    target.filter(|&idx| idx != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn entries(layout: &str) -> Vec<MenuEntry> {
        layout
            .chars()
            .map(|ch| match ch {
                '-' => MenuEntry::Separator,
                other => MenuItem::new(other.to_string()).hotkey(other).into(),
            })
            .collect()
    }

    #[test]
    fn initial_index_prefers_first_flagged_item() {
        let mut list = entries("-abc");
        assert_eq!(initial_index(&list), Some(1));
        for idx in [2, 3] {
            if let Some(item) = list[idx].as_item_mut() {
                item.selected = true;
            }
        }
        assert_eq!(initial_index(&list), Some(2));
        assert_eq!(initial_index(&entries("--")), None);
    }

    #[test]
    fn arrows_skip_separators_and_stop_at_ends() {
        let list = entries("a-b--c");
        assert_eq!(navigate(&list, 0, KeyCommand::Down, 0), Some(2));
        assert_eq!(navigate(&list, 2, KeyCommand::Down, 0), Some(5));
        assert_eq!(navigate(&list, 5, KeyCommand::Down, 0), None);
        assert_eq!(navigate(&list, 5, KeyCommand::Up, 0), Some(2));
        assert_eq!(navigate(&list, 0, KeyCommand::Up, 0), None);
        assert_eq!(navigate(&entries("-a"), 1, KeyCommand::Up, 0), None);
    }

    #[test]
    fn paging_skips_back_toward_current() {
        let list = entries("abc-efgh-j");
        assert_eq!(navigate(&list, 0, KeyCommand::PageDown, 3), Some(2));
        assert_eq!(navigate(&list, 5, KeyCommand::PageDown, 3), Some(7));
        assert_eq!(navigate(&list, 9, KeyCommand::PageUp, 1), None);
        assert_eq!(navigate(&list, 9, KeyCommand::PageUp, 2), Some(7));
        assert_eq!(navigate(&list, 4, KeyCommand::PageUp, 0), Some(0));
        assert_eq!(navigate(&list, 0, KeyCommand::PageDown, 0), Some(9));
        assert_eq!(navigate(&list, 9, KeyCommand::PageDown, 3), None);
    }

    #[test]
    fn home_and_end_land_on_items() {
        let list = entries("-ab-");
        assert_eq!(navigate(&list, 2, KeyCommand::Home, 0), Some(1));
        assert_eq!(navigate(&list, 1, KeyCommand::End, 0), Some(2));
        assert_eq!(navigate(&list, 2, KeyCommand::End, 0), None);
    }

    #[test]
    fn non_navigation_commands_do_not_move() {
        let list = entries("abc");
        for command in [
            KeyCommand::Enter,
            KeyCommand::Left,
            KeyCommand::Right,
            KeyCommand::Literal(Some('c')),
        ] {
            assert_eq!(navigate(&list, 1, command, 0), None);
        }
    }

    #[test]
    fn hotkeys_prefer_exact_case() {
        let mut list = entries("aA");
        assert_eq!(find_hotkey(&list, 'A'), Some(1));
        assert_eq!(find_hotkey(&list, 'a'), Some(0));
        list.remove(1);
        assert_eq!(find_hotkey(&list, 'A'), Some(0));
        assert_eq!(find_hotkey(&list, 'z'), None);
    }
}
