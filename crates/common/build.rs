fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "../../proto/storage.proto";
    let proto_dir = "../../proto";

    // Bundled protoc, so hosts without a system install can still build
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    std::fs::create_dir_all("src/generated")?;

    println!("cargo:rerun-if-changed={}", proto_file);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/generated")
        .compile(&[proto_file], &[proto_dir])?;

    Ok(())
}
