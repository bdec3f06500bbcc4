//! Bookmark reconciler
//!
//! On top of the shared merge rule, the bookmark payload has an ordering
//! requirement: parents before children. The server assigns ids in payload
//! order, so a child that references a folder the server has not seen yet
//! would point at a non-existent parent. Emitting root items first (then
//! children), each partition sorted ascending by `order`, removes any
//! reliance on the server resequencing.

use startdeck_core::domain::{Bookmark, BookmarkKind, LocalId, RemoteId};
use startdeck_core::ports::WireBookmark;

use super::tasks::reconciled_local_id;
use super::EntityReconciler;

/// Reconciler for the bookmark entity family
#[derive(Debug, Clone, Copy, Default)]
pub struct BookmarkReconciler;

impl EntityReconciler for BookmarkReconciler {
    type Local = Bookmark;
    type Wire = WireBookmark;

    fn to_wire(&self, local: &[Bookmark]) -> Vec<WireBookmark> {
        // Parents-before-children: roots first, then nested items, each
        // partition sorted by position. Stable sort keeps equal orders in
        // their original relative order.
        let mut roots: Vec<&Bookmark> = local.iter().filter(|b| b.is_root()).collect();
        let mut children: Vec<&Bookmark> = local.iter().filter(|b| !b.is_root()).collect();
        roots.sort_by_key(|b| b.order);
        children.sort_by_key(|b| b.order);

        roots
            .into_iter()
            .chain(children)
            .map(|bookmark| WireBookmark {
                id: bookmark.remote_id.as_ref().map(|r| r.as_str().to_string()),
                offline_id: Some(bookmark.local_id.as_str().to_string()),
                title: bookmark.title.clone(),
                url: bookmark.url.clone(),
                parent_id: bookmark
                    .parent_id
                    .as_ref()
                    .map(|p| p.as_str().to_string()),
                kind: kind_to_wire(bookmark.kind).to_string(),
                order: bookmark.order,
                sticker: bookmark.sticker.clone(),
                custom_text_color: bookmark.custom_text_color.clone(),
                custom_background: bookmark.custom_background.clone(),
            })
            .collect()
    }

    fn from_wire(&self, wire: &[WireBookmark]) -> Vec<Bookmark> {
        wire.iter()
            .map(|record| Bookmark {
                local_id: reconciled_local_id(record.offline_id.as_deref(), record.id.as_deref()),
                remote_id: record
                    .id
                    .as_deref()
                    .and_then(|id| RemoteId::new(id).ok()),
                title: record.title.clone(),
                url: record.url.clone(),
                parent_id: record
                    .parent_id
                    .as_deref()
                    .and_then(|p| LocalId::new(p).ok()),
                kind: kind_from_wire(&record.kind),
                order: record.order,
                sticker: record.sticker.clone(),
                custom_text_color: record.custom_text_color.clone(),
                custom_background: record.custom_background.clone(),
            })
            .collect()
    }
}

fn kind_to_wire(kind: BookmarkKind) -> &'static str {
    match kind {
        BookmarkKind::Link => "link",
        BookmarkKind::Folder => "folder",
    }
}

/// Unknown kind strings map to `Link`; this layer is total and does not
/// reject records over a field it can render either way
fn kind_from_wire(kind: &str) -> BookmarkKind {
    kind.parse().unwrap_or(BookmarkKind::Link)
}
