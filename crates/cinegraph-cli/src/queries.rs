//! GraphQL documents sent by the client

/// Every movie, as listed by `cinegraph movies`
pub const GET_MOVIES_QUERY: &str = r#"
{
  movies {
    name
    genre
    id
  }
}
"#;

/// Every director; also feeds the director picker of the add-movie form
pub const GET_DIRECTORS_QUERY: &str = r#"
{
  directors {
    name
    age
    id
  }
}
"#;

/// One movie with its director
pub const GET_MOVIE_QUERY: &str = r#"
query ($id: ID!) {
  movie(id: $id) {
    id
    name
    genre
    director {
      id
      name
      age
    }
  }
}
"#;

/// One director with their movies
pub const GET_DIRECTOR_QUERY: &str = r#"
query ($id: ID!) {
  director(id: $id) {
    id
    name
    age
    movies {
      id
      name
      genre
    }
  }
}
"#;

/// `!` marks variables the caller must supply
pub const ADD_MOVIE_MUTATION: &str = r#"
mutation ($name: String!, $genre: String!, $directorId: ID!) {
  addMovie(name: $name, genre: $genre, directorId: $directorId) {
    name
    id
  }
}
"#;

/// Create a director
pub const ADD_DIRECTOR_MUTATION: &str = r#"
mutation ($name: String!, $age: Int!) {
  addDirector(name: $name, age: $age) {
    name
    age
    id
  }
}
"#;
