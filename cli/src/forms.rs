//! Creation and edit forms over dialoguer prompts.
//!
//! Per-field checks reuse the library validator, so a draft that
//! reaches submit has already passed every rule. A failed submit keeps
//! the draft editable and offers another round instead of navigating
//! away.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};
use skillet_core::views::{CreateView, EditView};
use skillet_core::{validate, Difficulty, RecipeApi, RecipeDraft, MEAL_TYPES};

pub async fn run_create(api: &dyn RecipeApi) -> Result<()> {
    let mut view = CreateView::new();
    fill_new_draft(view.draft_mut())?;

    loop {
        match view.submit(api).await {
            Ok(_) => {
                println!("Recipe registered.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Could not register recipe: {}", e);
                if !retry()? {
                    return Ok(());
                }
                revise_draft(view.draft_mut())?;
            }
        }
    }
}

pub async fn run_edit(api: &dyn RecipeApi, id: &str) -> Result<()> {
    let mut view = EditView::new(id);

    println!("Loading recipe {}...", id);
    if let Err(e) = view.initialize(api).await {
        // Terminal for this view: the form is never rendered.
        eprintln!("Could not load recipe: {}", e);
        return Ok(());
    }

    revise_draft(view.draft_mut())?;

    loop {
        match view.submit(api).await {
            Ok(_) => {
                println!("Recipe updated.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Could not update recipe: {}", e);
                if !retry()? {
                    return Ok(());
                }
                revise_draft(view.draft_mut())?;
            }
        }
    }
}

fn retry() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Keep editing and try again?")
        .default(true)
        .interact()?)
}

/// Prompt every field of a fresh draft. The meal type is picked from
/// the standard options here; revising offers free text.
fn fill_new_draft(draft: &mut RecipeDraft) -> Result<()> {
    let theme = ColorfulTheme::default();

    draft.titulo = prompt_text("Title", None)?;

    let meal = Select::with_theme(&theme)
        .with_prompt("Meal type")
        .items(MEAL_TYPES)
        .default(0)
        .interact()?;
    draft.tipo = MEAL_TYPES[meal].to_string();

    draft.num_pessoas = prompt_servings(draft.num_pessoas)?;
    draft.nivel_dificuldade = prompt_difficulty(None)?;
    draft.lista_ingredientes = prompt_multiline("Ingredients", "")?;
    draft.preparacao = prompt_multiline("Preparation", "")?;
    Ok(())
}

/// Re-prompt every field with the current values as starting points.
fn revise_draft(draft: &mut RecipeDraft) -> Result<()> {
    draft.titulo = prompt_text("Title", Some(&draft.titulo))?;
    draft.tipo = prompt_text("Meal type", Some(&draft.tipo))?;
    draft.num_pessoas = prompt_servings(draft.num_pessoas)?;
    draft.nivel_dificuldade = prompt_difficulty(Some(&draft.nivel_dificuldade))?;
    draft.lista_ingredientes = prompt_multiline("Ingredients", &draft.lista_ingredientes.clone())?;
    draft.preparacao = prompt_multiline("Preparation", &draft.preparacao.clone())?;
    Ok(())
}

fn prompt_text(label: &str, initial: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .validate_with(|value: &String| validate::check_required(value));
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}

fn prompt_servings(current: u32) -> Result<u32> {
    Ok(Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt("Number of people served")
        .default(current.max(1))
        .validate_with(|n: &u32| validate::check_num_pessoas(*n))
        .interact_text()?)
}

fn prompt_difficulty(current: Option<&str>) -> Result<String> {
    let default = current
        .and_then(Difficulty::from_str)
        .and_then(|d| Difficulty::ALL.iter().position(|c| *c == d))
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Difficulty")
        .items(Difficulty::ALL)
        .default(default)
        .interact()?;
    Ok(Difficulty::ALL[choice].as_str().to_string())
}

/// Multi-line fields open the user's editor, like the original's text
/// areas. An aborted or empty edit re-opens until something is entered.
fn prompt_multiline(label: &str, initial: &str) -> Result<String> {
    loop {
        println!("{} (an editor will open)...", label);
        if let Some(text) = Editor::new().edit(initial)? {
            if validate::check_required(&text).is_ok() {
                return Ok(text);
            }
        }
        eprintln!("{} is required.", label);
    }
}
