use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qcirc_core::{library, Circuit};
use qcirc_sim::{classify, Simulator};

fn create_layered_circuit(num_qubits: usize, depth: usize) -> Circuit {
    let mut circuit = Circuit::new(num_qubits).unwrap();

    for d in 0..depth {
        // Single qubit gates layer
        for i in 0..num_qubits {
            if (i + d) % 2 == 0 {
                circuit.h(i).unwrap();
            } else {
                circuit.x(i).unwrap();
            }
        }

        // Entangling layer
        for i in 0..(num_qubits - 1) {
            if (i + d) % 2 == 0 {
                circuit.cnot(i, i + 1).unwrap();
            }
        }
    }

    circuit
}

fn bench_ghz(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz");
    let simulator = Simulator::default();

    for num_qubits in [2, 4, 8, 12] {
        let circuit = library::ghz(num_qubits).unwrap().circuit;
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), &circuit, |b, circuit| {
            b.iter(|| simulator.run(black_box(circuit)).unwrap())
        });
    }

    group.finish();
}

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered");
    let simulator = Simulator::default();

    for num_qubits in [4, 8, 10] {
        let circuit = create_layered_circuit(num_qubits, 10);
        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), &circuit, |b, circuit| {
            b.iter(|| simulator.run(black_box(circuit)).unwrap())
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let circuit = create_layered_circuit(6, 20);
    c.bench_function("classify_layered", |b| {
        b.iter(|| classify(black_box(circuit.gates()), 6))
    });
}

criterion_group!(benches, bench_ghz, bench_layered, bench_classify);
criterion_main!(benches);
