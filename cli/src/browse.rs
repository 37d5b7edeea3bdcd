//! Interactive collection view.
//!
//! Renders the list and the detail card, and drives the collection
//! operations from a menu. Form views are entered through routes and
//! the collection is re-fetched on the way back; no state is shared
//! across views.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use skillet_core::views::CollectionView;
use skillet_core::{RecipeApi, Route};

use crate::forms;

enum Action {
    Select(usize),
    New,
    Edit,
    Delete,
    Refresh,
    Quit,
}

pub async fn run(api: &dyn RecipeApi) -> Result<()> {
    let mut view = CollectionView::new();
    view.load(api).await;

    loop {
        render(&view);
        match prompt_action(&view)? {
            Action::Select(index) => {
                let id = view.recipes()[index].id.clone();
                view.select(&id);
            }
            Action::New => {
                forms::run_create(api).await?;
                view = reload(api).await;
            }
            Action::Edit => {
                if let Some(Route::Edit(id)) = view.edit_route() {
                    forms::run_edit(api, &id).await?;
                    view = reload(api).await;
                }
            }
            Action::Delete => {
                delete_flow(&mut view, api).await?;
            }
            Action::Refresh => {
                view = reload(api).await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Views are disposable: navigation always comes back to a fresh
/// collection view with a full re-fetch.
async fn reload(api: &dyn RecipeApi) -> CollectionView {
    let mut view = CollectionView::new();
    view.load(api).await;
    view
}

fn render(view: &CollectionView) {
    println!();
    if view.recipes().is_empty() {
        println!("No recipes registered.");
    }
    for recipe in view.recipes() {
        let marker = if view.active().is_some_and(|a| a.id == recipe.id) {
            ">"
        } else {
            " "
        };
        println!(" {} {}", marker, recipe.titulo);
    }

    match view.active() {
        Some(recipe) => {
            println!();
            println!("=== {} ===", view.detail_header().unwrap_or_default());
            println!("Meal type:  {}", recipe.tipo);
            println!("Serves:     {}", recipe.num_pessoas);
            println!("Difficulty: {}", recipe.nivel_dificuldade);
            println!("Ingredients:");
            println!("{}", recipe.lista_ingredientes);
            println!("Preparation:");
            println!("{}", recipe.preparacao);
        }
        None => println!("\nSelect a recipe to see its details."),
    }
}

fn prompt_action(view: &CollectionView) -> Result<Action> {
    let mut items: Vec<String> = view
        .recipes()
        .iter()
        .map(|r| format!("View {}", r.titulo))
        .collect();
    let recipe_count = items.len();

    items.push("New recipe".to_string());
    let has_active = view.active().is_some();
    if has_active {
        items.push("Edit selected".to_string());
        items.push("Delete selected".to_string());
    }
    items.push("Refresh".to_string());
    items.push("Quit".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Action")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice < recipe_count {
        Action::Select(choice)
    } else {
        match (choice - recipe_count, has_active) {
            (0, _) => Action::New,
            (1, true) => Action::Edit,
            (2, true) => Action::Delete,
            (1, false) | (3, true) => Action::Refresh,
            _ => Action::Quit,
        }
    })
}

async fn delete_flow(view: &mut CollectionView, api: &dyn RecipeApi) -> Result<()> {
    let Some(titulo) = view.request_delete().map(str::to_owned) else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "This cannot be undone. Permanently delete \"{}\"?",
            titulo
        ))
        .default(false)
        .interact()?;

    if !confirmed {
        view.cancel_delete();
        return Ok(());
    }

    match view.confirm_delete(api).await {
        Ok(()) => println!("Recipe deleted."),
        Err(e) => eprintln!("Could not delete recipe: {}", e),
    }
    Ok(())
}
