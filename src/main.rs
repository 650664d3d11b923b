fn main() {
    mcl::term::main();
}
