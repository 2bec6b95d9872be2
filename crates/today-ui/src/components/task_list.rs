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

use super::TaskListRow;

pub const EMPTY_LIST_MESSAGE: &str =
  "Your list is empty! Add some tasks.";

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="task-list">
            <div class="empty-state">
                <p>{ EMPTY_LIST_MESSAGE }</p>
            </div>
        </div>
    };
  }

  html! {
      <div class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let key = task.id.value();
                  html! {
                  <TaskListRow
                      key={key}
                      task={task}
                      on_toggle={props.on_toggle.clone()}
                      on_remove={props.on_remove.clone()}
                  />
                  }
              })
          }
      </div>
  }
}
