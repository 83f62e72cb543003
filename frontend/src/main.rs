fn main() {
    hrportal_frontend::run();
}
