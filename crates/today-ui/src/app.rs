mod state;
mod storage;

use gloo::console::log;
use today_core::snapshot::{
  load_tasks,
  mirror_tasks
};
use today_core::{
  AppConfig,
  QuoteState,
  TASKS_STORAGE_KEY,
  TaskId
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

pub(crate) use self::state::{
  QuoteAction,
  QuoteModel
};
use self::state::{
  TaskAction,
  TasksModel
};
use self::storage::LocalStorageSlot;
use crate::api;
use crate::components::{
  AppHeader,
  FontLoader,
  QuoteCard,
  QuotePanel,
  TaskForm,
  TaskList
};

const BUNDLED_CONFIG_TOML: &str =
  include_str!("../assets/today.toml");

fn task_slot() -> LocalStorageSlot {
  LocalStorageSlot::new(
    TASKS_STORAGE_KEY
  )
}

#[function_component(App)]
pub fn app() -> Html {
  let tasks = use_reducer(|| {
    TasksModel(load_tasks(&task_slot()))
  });
  let config =
    use_state(|| None::<AppConfig>);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let config = config.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          let runtime =
            api::fetch_runtime_config()
              .await;
          let resolved =
            match AppConfig::load(
              BUNDLED_CONFIG_TOML,
              runtime.as_deref()
            ) {
              | Ok(cfg) => cfg,
              | Err(error) => {
                tracing::error!(
                  %error,
                  "bundled configuration \
                   invalid; using defaults"
                );
                AppConfig::default()
              }
            };
          config.set(Some(resolved));
        }
      );
      || ()
    });
  }

  {
    use_effect_with(
      tasks.0.clone(),
      move |store| {
        mirror_tasks(
          &task_slot(),
          store
        );
        || ()
      }
    );
  }

  let on_add = {
    let tasks = tasks.dispatcher();
    Callback::from(move |text: String| {
      tasks.dispatch(TaskAction::Add(
        text
      ));
    })
  };

  let on_toggle = {
    let tasks = tasks.dispatcher();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "task.toggle",
        &id.to_string()
      );
      tasks.dispatch(
        TaskAction::Toggle(id)
      );
    })
  };

  let on_remove = {
    let tasks = tasks.dispatcher();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "task.remove",
        &id.to_string()
      );
      tasks.dispatch(
        TaskAction::Remove(id)
      );
    })
  };

  let header = (*config)
    .clone()
    .unwrap_or_default();

  let quote_section =
    match (*config).as_ref() {
      | Some(cfg) => html! {
          <QuotePanel config={cfg.quote.clone()} />
      },
      | None => html! {
          <QuoteCard state={QuoteState::default()} />
      }
    };

  let font_loader =
    match (*config).as_ref() {
      | Some(cfg) => html! {
          <FontLoader href={cfg.fonts_href.clone()} />
      },
      | None => html! {}
    };

  html! {
      <div class="page">
          { font_loader }
          <div class="card">
              <AppHeader title={header.title} tagline={header.tagline} />
              <div class="card-body">
                  <TaskForm on_add={on_add} />
                  <TaskList
                      tasks={tasks.0.tasks().to_vec()}
                      on_toggle={on_toggle}
                      on_remove={on_remove}
                  />
                  { quote_section }
              </div>
          </div>
      </div>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
