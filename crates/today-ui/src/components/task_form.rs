use today_core::TaskDraft;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_add: Callback<String>
}

/// Entry field plus submit button. Owns the text buffer; every submit
/// hands the trimmed text upward and empties the field.
#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = use_state(TaskDraft::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        let mut next = (*draft).clone();
        next.set_text(input.value());
        draft.set(next);
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        let mut next = (*draft).clone();
        let text = next.take();
        draft.set(next);
        on_add.emit(text);
      }
    )
  };

  html! {
      <form class="task-form" onsubmit={on_submit}>
          <div class="task-input">
              <input
                  type="text"
                  value={draft.text().to_string()}
                  oninput={on_input}
                  placeholder="Add a new task..."
              />
              <button type="submit" class="add-button" aria-label="Add task">
                  <span>{ "+" }</span>
              </button>
          </div>
      </form>
  }
}
