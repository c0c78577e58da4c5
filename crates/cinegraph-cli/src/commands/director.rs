use anyhow::{Result, bail};
use serde_json::json;

use super::OutputContext;
use crate::client::{CinegraphClient, DirectorSummary};

pub async fn list(client: &CinegraphClient, output: &OutputContext) -> Result<()> {
    let directors = client.directors().await?;
    let rows: Vec<_> = directors
        .iter()
        .map(|d| vec![json!(d.name), json!(d.age), json!(d.id)])
        .collect();
    output.print_table(&["name", "age", "id"], &rows);
    Ok(())
}

pub async fn show(client: &CinegraphClient, id: &str, output: &OutputContext) -> Result<()> {
    let Some(director) = client.director(id).await? else {
        bail!("No director with id {id}");
    };

    if output.json {
        output.print_json(&director);
        return Ok(());
    }

    println!("Director");
    println!("========");
    println!("Name: {}", director.name);
    println!("Age:  {}", director.age);
    println!("Id:   {}", director.id);

    let rows: Vec<_> = director
        .movies
        .iter()
        .map(|m| vec![json!(m.name), json!(m.genre), json!(m.id)])
        .collect();
    println!();
    output.print_table(&["name", "genre", "id"], &rows);
    Ok(())
}

pub async fn add(
    client: &CinegraphClient,
    name: &str,
    age: i32,
    output: &OutputContext,
) -> Result<()> {
    let director = client.add_director(name, age).await?;

    if output.json {
        output.print_json(&director);
    } else {
        output.print_success(&format!("Added director {} ({})", director.name, director.id));
    }
    Ok(())
}

/// Entry shown in the director picker
pub fn director_label(director: &DirectorSummary) -> String {
    format!("{} ({})", director.name, director.age)
}
