use std::rc::Rc;

use today_core::{
  CancelToken,
  QuoteEvent,
  QuoteState,
  TaskId,
  TaskStore
};
use yew::Reducible;

pub enum TaskAction {
  Add(String),
  Toggle(TaskId),
  Remove(TaskId)
}

/// Task store as held by the component tree.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TasksModel(pub TaskStore);

impl Reducible for TasksModel {
  type Action = TaskAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0.clone();
    let changed = match action {
      | TaskAction::Add(text) => {
        next.add_task(&text).is_some()
      }
      | TaskAction::Toggle(id) => {
        next.toggle_task(id)
      }
      | TaskAction::Remove(id) => {
        next.remove_task(id)
      }
    };

    if changed {
      Rc::new(Self(next))
    } else {
      self
    }
  }
}

pub struct QuoteAction {
  pub event: QuoteEvent,
  pub token: CancelToken
}

#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct QuoteModel(pub QuoteState);

impl Reducible for QuoteModel {
  type Action = QuoteAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    match self
      .0
      .apply_unless_cancelled(
        action.event,
        &action.token
      ) {
      | Some(next) => {
        Rc::new(Self(next))
      }
      | None => self
    }
  }
}

#[cfg(test)]
mod tests {
  use today_core::{
    Quote,
    TaskDraft
  };

  use super::*;

  #[test]
  fn blank_add_returns_same_model() {
    let model =
      Rc::new(TasksModel::default());
    let next = model.clone().reduce(
      TaskAction::Add("  ".to_string())
    );
    assert!(Rc::ptr_eq(&model, &next));
  }

  #[test]
  fn form_submissions_reach_the_store_in_order()
  {
    let mut model =
      Rc::new(TasksModel::default());
    let mut draft = TaskDraft::new();

    for input in
      ["Plan week", "   ", "", " Gym "]
    {
      draft.set_text(input);
      model = model.reduce(
        TaskAction::Add(draft.take())
      );
      assert_eq!(draft.text(), "");
    }

    let texts: Vec<_> = model
      .0
      .tasks()
      .iter()
      .map(|t| t.text.as_str())
      .collect();
    assert_eq!(
      texts,
      vec!["Plan week", "Gym"]
    );
  }

  #[test]
  fn add_toggle_remove_through_reducer() {
    let model =
      Rc::new(TasksModel::default());
    let added = model.reduce(
      TaskAction::Add(
        "Buy milk".to_string()
      )
    );
    let id = added.0.tasks()[0].id;

    let toggled = added
      .reduce(TaskAction::Toggle(id));
    assert!(toggled.0.tasks()[0].completed);

    let removed = toggled
      .reduce(TaskAction::Remove(id));
    assert!(removed.0.is_empty());
  }

  #[test]
  fn cancelled_quote_action_is_ignored() {
    let model =
      Rc::new(QuoteModel::default());
    let token = CancelToken::new();
    token.cancel();

    let next =
      model.clone().reduce(QuoteAction {
        event: QuoteEvent::Fetched(
          Quote::new("late", "")
        ),
        token
      });
    assert!(Rc::ptr_eq(&model, &next));
  }
}
