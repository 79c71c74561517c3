use serde_json::{Map, Value, json};

fn id_param(name: &str, description: &str) -> Value {
    json!({
        "in": "path",
        "name": name,
        "required": true,
        "description": description,
        "schema": { "type": "string" },
    })
}

fn response(description: &str) -> Value {
    json!({ "description": description })
}

fn json_body(schema: &str, description: &str) -> Value {
    json!({
        "description": description,
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{}", schema) }
            }
        }
    })
}

fn object(properties: Vec<(&str, Value)>) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({ "type": "object", "properties": properties })
}

fn typed(kind: &str) -> Value {
    json!({ "type": kind })
}

fn formatted(kind: &str, format: &str) -> Value {
    json!({ "type": kind, "format": format })
}

fn movie_schema() -> Value {
    let strings = json!({ "type": "array", "items": { "type": "string" } });
    let imdb = object(vec![
        ("rating", typed("number")),
        ("votes", typed("integer")),
        ("id", typed("string")),
    ]);
    let viewer = object(vec![
        ("rating", typed("number")),
        ("numReviews", typed("integer")),
    ]);
    let tomatoes = object(vec![
        ("viewer", viewer),
        ("lastUpdated", formatted("string", "date-time")),
    ]);

    let mut schema = object(vec![
        ("title", typed("string")),
        ("plot", typed("string")),
        ("fullplot", typed("string")),
        ("genres", strings.clone()),
        ("cast", strings.clone()),
        ("directors", strings.clone()),
        ("countries", strings.clone()),
        ("languages", strings),
        ("runtime", typed("integer")),
        ("poster", typed("string")),
        ("released", formatted("string", "date")),
        ("rated", typed("string")),
        ("awards", typed("string")),
        ("year", typed("integer")),
        ("type", typed("string")),
        ("imdb", imdb),
        ("tomatoes", tomatoes),
        ("num_mflix_comments", typed("integer")),
        ("lastupdated", formatted("string", "date-time")),
    ]);
    schema["required"] = json!(["title"]);
    schema
}

fn comment_schema() -> Value {
    let mut schema = object(vec![
        ("name", typed("string")),
        ("email", formatted("string", "email")),
        ("text", typed("string")),
        ("date", formatted("string", "date-time")),
        ("movie_id", typed("string")),
    ]);
    schema["required"] = json!(["name", "email", "text", "date", "movie_id"]);
    schema
}

fn operation(tag: &str, summary: &str, parameters: &[&Value], responses: &[(&str, &str)]) -> Value {
    let responses: Map<String, Value> = responses
        .iter()
        .map(|(code, description)| (code.to_string(), response(description)))
        .collect();
    json!({
        "tags": [tag],
        "summary": summary,
        "parameters": parameters,
        "responses": responses,
    })
}

fn with_body(mut operation: Value, body: Value) -> Value {
    operation["requestBody"] = body;
    operation
}

const SERVER_ERROR: (&str, &str) = ("500", "Internal Server Error");
const MISSING_FIELDS: (&str, &str) = ("400", "Bad Request. Missing required fields.");

/// OpenAPI 3.0 description of every route the service exposes.
pub fn api_description() -> Value {
    let movie_id = id_param("movie_id", "ID of the movie");
    let comment_id = id_param("comment_id", "ID of the comment");
    let movie = [&movie_id];
    let comment = [&movie_id, &comment_id];

    let movies = json!({
        "get": operation("Movies", "Get all movies", &[], &[("200", "Successful operation"), SERVER_ERROR]),
        "post": with_body(
            operation("Movies", "Create a new movie", &[], &[("201", "Movie added successfully"), MISSING_FIELDS, SERVER_ERROR]),
            json_body("Movie", "Movie to add"),
        ),
    });

    let single_movie = json!({
        "get": operation("Movie", "Get movie by ID", &movie, &[
            ("200", "Successful operation"),
            ("400", "Invalid movie id"),
            ("404", "Movie not found"),
            SERVER_ERROR,
        ]),
        "put": with_body(
            operation("Movie", "Update movie by ID; only supplied fields change", &movie, &[
                ("200", "Movie updated successfully"),
                ("404", "Movie not found"),
                SERVER_ERROR,
            ]),
            json_body("Movie", "Fields to change"),
        ),
        "delete": operation("Movie", "Delete movie by ID", &movie, &[
            ("200", "Movie deleted successfully"),
            SERVER_ERROR,
        ]),
    });

    let comments = json!({
        "get": operation("Comments", "Get comments for a movie", &movie, &[
            ("200", "Successful operation"),
            SERVER_ERROR,
        ]),
        "post": with_body(
            operation("Comments", "Add a new comment for a specific movie", &movie, &[
                ("201", "Comment added successfully"),
                MISSING_FIELDS,
                ("404", "Movie not found"),
                SERVER_ERROR,
            ]),
            json_body("Comment", "Comment to add"),
        ),
    });

    let single_comment = json!({
        "get": operation("Comment", "Get a comment by ID for a specific movie", &comment, &[
            ("200", "Successful operation"),
            ("404", "Comment not found"),
            SERVER_ERROR,
        ]),
        "put": with_body(
            operation("Comment", "Update a comment for a specific movie", &comment, &[
                ("200", "Comment updated successfully"),
                ("404", "Comment not found or not updated"),
                SERVER_ERROR,
            ]),
            json_body("Comment", "Fields to change"),
        ),
        "delete": operation("Comment", "Delete a comment for a specific movie", &comment, &[
            ("200", "Comment deleted successfully"),
            ("404", "Comment not found"),
            SERVER_ERROR,
        ]),
    });

    json!({
        "openapi": "3.0.0",
        "info": { "title": "Sample Mflix API", "version": "1.0.0" },
        "paths": {
            "/movies": movies,
            "/movie/{movie_id}": single_movie,
            "/movie/{movie_id}/comments": comments,
            "/movie/{movie_id}/comment/{comment_id}": single_comment,
        },
        "components": {
            "schemas": {
                "Movie": movie_schema(),
                "Comment": comment_schema(),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_described() {
        let doc = api_description();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 4);
        assert!(paths["/movies"]["post"].is_object());
        assert!(paths["/movie/{movie_id}/comments"]["post"].is_object());
        assert!(paths["/movie/{movie_id}/comment/{comment_id}"]["post"].is_null());
        assert_eq!(
            doc["components"]["schemas"]["Comment"]["required"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
        let movie = &doc["components"]["schemas"]["Movie"]["properties"];
        assert_eq!(movie["released"]["format"], "date");
        assert_eq!(movie["lastupdated"]["format"], "date-time");
    }
}
