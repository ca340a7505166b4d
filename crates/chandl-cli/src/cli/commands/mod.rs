//! CLI command handlers, one file per command.

mod grab;
mod list;

pub use grab::run_grab;
pub use list::run_list;

use anyhow::{bail, Result};
use chandl_core::page::{Page, PageKind};
use chandl_core::ElementRef;

/// Selects the image set for a page the way the original site buttons did,
/// and derives the default archive name for it.
///
/// Home feed → recent images; thread page → its post images; board index →
/// every visible post image, or a single thread's when `thread` is given.
fn collect_images<'a>(
    page: &'a Page,
    thread: Option<&str>,
) -> Result<(Vec<ElementRef<'a>>, String)> {
    match page.kind() {
        PageKind::Home => Ok((page.recent_images(), "recent_images.zip".to_string())),
        PageKind::Thread => {
            let board = page.board_name().unwrap_or_else(|| "board".to_string());
            let id = page.thread_id().unwrap_or_else(|| "thread".to_string());
            Ok((page.post_images(), format!("{board}_{id}.zip")))
        }
        PageKind::Board => {
            let board = page.board_name().unwrap_or_else(|| "board".to_string());
            match thread {
                Some(id) => {
                    let block = page
                        .threads()
                        .into_iter()
                        .find(|t| t.id.as_deref() == Some(id));
                    match block {
                        Some(block) => {
                            let board = block.board.clone().unwrap_or(board);
                            Ok((block.post_images(), format!("{board}_{id}.zip")))
                        }
                        None => bail!("thread {id} not found on this board page"),
                    }
                }
                None => Ok((page.visible_post_images(), format!("{board}_all_visible.zip"))),
            }
        }
    }
}
