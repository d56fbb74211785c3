use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

/// Apply one vote press of the given user to a suggestion.
///
/// Pressing the same direction again withdraws the vote, pressing the
/// opposite direction switches it. The derived score and both voter
/// lists are persisted in a single targeted write.
pub fn vote_suggestion<R>(
    repo: &R,
    voter: &User,
    suggestion_id: &str,
    direction: VoteDirection,
) -> Result<TreeSuggestion>
where
    R: SuggestionRepo,
{
    let mut suggestion = repo.get_suggestion(suggestion_id)?;
    toggle_vote(
        &mut suggestion.upvoted_by,
        &mut suggestion.downvoted_by,
        &voter.id,
        direction,
    );
    suggestion.votes = VoteScore::tally(&suggestion.upvoted_by, &suggestion.downvoted_by);
    repo.update_suggestion_votes(
        suggestion_id,
        &suggestion.upvoted_by,
        &suggestion.downvoted_by,
        suggestion.votes,
    )?;
    log::debug!("User {} voted on suggestion {suggestion_id}", voter.id);
    Ok(suggestion)
}

// A voter is never left in both lists.
fn toggle_vote(
    upvoted_by: &mut Vec<Id>,
    downvoted_by: &mut Vec<Id>,
    voter: &Id,
    direction: VoteDirection,
) {
    let (chosen, opposite) = match direction {
        VoteDirection::Up => (upvoted_by, downvoted_by),
        VoteDirection::Down => (downvoted_by, upvoted_by),
    };
    if let Some(pos) = chosen.iter().position(|id| id == voter) {
        chosen.remove(pos);
        return;
    }
    opposite.retain(|id| id != voter);
    chosen.push(voter.clone());
}
