//! Selected-idea projection: a direct lookup plus tally, not a ranking.

use serde::Serialize;

use ib_algo::{tally_idea, CategoryIndex};
use ib_core::entities::{live_ideas, Idea};
use ib_core::ids::IdeaId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedIdea {
    pub id: IdeaId,
    pub content: String,
    pub vote_count: u64,
    pub comment_count: u32,
    /// Category title; `None` when the idea has no known category.
    pub category: Option<String>,
}

/// Project the selected idea, or `None` when nothing (live) is selected.
pub fn project_selected(
    selected_idea_id: Option<&IdeaId>,
    ideas: &[Idea],
    categories: &CategoryIndex,
) -> Option<SelectedIdea> {
    let wanted = selected_idea_id?;
    let idea = live_ideas(ideas).find(|i| &i.id == wanted)?;
    Some(SelectedIdea {
        id: idea.id.clone(),
        content: idea.content.clone(),
        vote_count: tally_idea(idea).total,
        comment_count: idea.comment_count,
        category: categories.title_of(idea.category_ref.as_ref()).map(str::to_owned),
    })
}
