use mangam_api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let yaml = ApiDoc::openapi().to_yaml().expect("Failed to generate YAML");
    println!("{}", yaml);
}
