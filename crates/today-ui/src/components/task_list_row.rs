use today_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

fn row_class(completed: bool) -> &'static str {
  if completed {
    "row done"
  } else {
    "row"
  }
}

fn text_class(
  completed: bool
) -> &'static str {
  if completed {
    "task-text struck"
  } else {
    "task-text"
  }
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let completed = props.task.completed;
  let on_toggle =
    props.on_toggle.clone();
  let on_remove =
    props.on_remove.clone();

  html! {
      <div class={row_class(completed)}>
          <div class="row-body" onclick={move |_| on_toggle.emit(id)}>
              <span class={text_class(completed)}>{ &props.task.text }</span>
          </div>
          <button
              class="delete-button"
              aria-label="Delete task"
              onclick={move |e: yew::MouseEvent| {
                  e.stop_propagation();
                  on_remove.emit(id);
              }}
          >
              <span>{ "×" }</span>
          </button>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn completed_rows_are_dimmed_and_struck()
  {
    assert_eq!(row_class(false), "row");
    assert_eq!(
      row_class(true),
      "row done"
    );
    assert_eq!(
      text_class(false),
      "task-text"
    );
    assert_eq!(
      text_class(true),
      "task-text struck"
    );
  }
}
