//! Viewport offset arithmetic.

use crate::keys::KeyCommand;

/// Offset after the selection moved from somewhere inside the old viewport to `new_index`.
///
/// Paging keys turn the viewport by a whole page; every other move scrolls
/// just enough to keep `new_index` visible.
pub fn scroll(
    old_offset: usize,
    new_index: usize,
    page_size: usize,
    item_count: usize,
    command: KeyCommand,
) -> usize {
    if page_size == 0 {
        return 0;
    }
    if new_index < old_offset {
        return match command {
            KeyCommand::PageUp => old_offset.saturating_sub(page_size),
            _ => new_index,
        };
    }
    if new_index >= old_offset + page_size {
        return match command {
            KeyCommand::PageDown => {
                (old_offset + page_size).min(item_count.saturating_sub(page_size))
            }
            _ => new_index + 1 - page_size,
        };
    }
    old_offset
}

/// Smallest adjustment of `offset` that shows `current` and stays in range.
pub fn settle(offset: usize, current: usize, page_size: usize, item_count: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    let offset = offset.min(item_count.saturating_sub(page_size));
    scroll(offset, current, page_size, item_count, KeyCommand::Literal(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_page_never_scrolls() {
        assert_eq!(scroll(3, 40, 0, 50, KeyCommand::Down), 0);
        assert_eq!(settle(9, 40, 0, 50), 0);
    }

    #[test]
    fn moves_inside_viewport_keep_offset() {
        assert_eq!(scroll(2, 4, 5, 12, KeyCommand::Down), 2);
        assert_eq!(scroll(2, 2, 5, 12, KeyCommand::Up), 2);
    }

    #[test]
    fn stepping_past_an_edge_scrolls_one_row() {
        assert_eq!(scroll(0, 5, 5, 12, KeyCommand::Down), 1);
        assert_eq!(scroll(3, 2, 5, 12, KeyCommand::Up), 2);
    }

    #[test]
    fn paging_turns_whole_pages_and_clamps() {
        assert_eq!(scroll(0, 5, 5, 12, KeyCommand::PageDown), 5);
        assert_eq!(scroll(5, 10, 5, 12, KeyCommand::PageDown), 7);
        assert_eq!(scroll(7, 6, 5, 12, KeyCommand::PageUp), 2);
        assert_eq!(scroll(2, 0, 5, 12, KeyCommand::PageUp), 0);
    }

    #[test]
    fn jumps_show_target_at_the_edge() {
        assert_eq!(scroll(0, 11, 5, 12, KeyCommand::End), 7);
        assert_eq!(scroll(7, 0, 5, 12, KeyCommand::Home), 0);
    }

    #[test]
    fn settle_clamps_to_last_page() {
        assert_eq!(settle(0, 8, 5, 12), 4);
        assert_eq!(settle(10, 11, 5, 12), 7);
        assert_eq!(settle(0, 2, 20, 12), 0);
    }
}
