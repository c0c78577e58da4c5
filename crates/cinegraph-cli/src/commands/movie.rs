use anyhow::{Result, bail};
use dialoguer::{Input, Select};
use serde_json::json;

use super::OutputContext;
use super::director::director_label;
use crate::client::{CinegraphClient, DirectorSummary};

pub async fn list(client: &CinegraphClient, output: &OutputContext) -> Result<()> {
    let movies = client.movies().await?;
    let rows: Vec<_> = movies
        .iter()
        .map(|m| vec![json!(m.name), json!(m.genre), json!(m.id)])
        .collect();
    output.print_table(&["name", "genre", "id"], &rows);
    Ok(())
}

pub async fn show(client: &CinegraphClient, id: &str, output: &OutputContext) -> Result<()> {
    let Some(movie) = client.movie(id).await? else {
        bail!("No movie with id {id}");
    };

    if output.json {
        output.print_json(&movie);
        return Ok(());
    }

    println!("Movie");
    println!("=====");
    println!("Name:     {}", movie.name);
    println!("Genre:    {}", movie.genre);
    println!("Id:       {}", movie.id);
    match &movie.director {
        Some(director) => println!("Director: {} [{}]", director_label(director), director.id),
        None => println!("Director: -"),
    }
    Ok(())
}

/// Fields of the add-movie form; flags pre-fill, prompts fill the rest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub director_id: Option<String>,
}

impl MovieForm {
    /// Prompt for every missing field
    ///
    /// `directors` populates the picker and is only consulted when no
    /// director id was given.
    pub fn complete(self, directors: &[DirectorSummary]) -> Result<(String, String, String)> {
        let name = match self.name {
            Some(name) => name,
            None => Input::<String>::new().with_prompt("Name").interact_text()?,
        };
        let genre = match self.genre {
            Some(genre) => genre,
            None => Input::<String>::new().with_prompt("Genre").interact_text()?,
        };
        let director_id = match self.director_id {
            Some(id) => id,
            None => {
                if directors.is_empty() {
                    bail!("No directors yet; add one with `cinegraph add-director`");
                }
                let labels: Vec<String> = directors.iter().map(director_label).collect();
                let index = Select::new()
                    .with_prompt("Director")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                directors[index].id.clone()
            }
        };
        Ok((name, genre, director_id))
    }
}

pub async fn add(client: &CinegraphClient, form: MovieForm, output: &OutputContext) -> Result<()> {
    let directors = if form.director_id.is_none() {
        client.directors().await?
    } else {
        Vec::new()
    };
    let (name, genre, director_id) = form.complete(&directors)?;

    let movie = client.add_movie(&name, &genre, &director_id).await?;

    if output.json {
        output.print_json(&movie);
    } else {
        output.print_success(&format!("Added movie {} ({})", movie.name, movie.id));
    }
    Ok(())
}
