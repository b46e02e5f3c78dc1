use scg_core::config::{GeneratorOptions, ScgConfig};
use scg_core::ir::IrSpec;
use scg_core::transform::{PipelineOptions, post_process};
use scg_core::{CodeGenerator, FileRole, GeneratedFile, load};
use scg_spring::SpringServerGenerator;

const SHOP: &str = include_str!("../../scg-core/tests/fixtures/shop-ir.yaml");

fn generate(options: GeneratorOptions) -> Vec<GeneratedFile> {
    let config = ScgConfig {
        options,
        ..ScgConfig::default()
    };
    let mut ir: IrSpec = load::from_yaml(SHOP).unwrap();
    post_process(
        &mut ir,
        &PipelineOptions {
            generator: config.options,
            group_by: config.group_by,
        },
    );
    SpringServerGenerator.generate(&ir, &config).unwrap()
}

fn file<'a>(files: &'a [GeneratedFile], suffix: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|f| f.path.ends_with(suffix))
        .unwrap_or_else(|| panic!("should have generated {suffix}"))
}

#[test]
fn generates_controller_service_and_model_files() {
    let files = generate(GeneratorOptions::default());
    let paths: Vec<(&str, FileRole)> = files.iter().map(|f| (f.path.as_str(), f.role)).collect();
    assert_eq!(
        paths,
        vec![
            ("src/main/java/ru/egartech/swagger/OrderController.java", FileRole::Controller),
            ("src/main/java/ru/egartech/swagger/OrderService.java", FileRole::Service),
            ("src/main/java/ru/egartech/swagger/CustomerController.java", FileRole::Controller),
            ("src/main/java/ru/egartech/swagger/CustomerService.java", FileRole::Service),
            ("src/main/java/ru/egartech/swagger/model/Order.java", FileRole::Model),
            ("src/main/java/ru/egartech/swagger/model/OrderLine.java", FileRole::Model),
            ("src/main/java/ru/egartech/swagger/model/OrderStatus.java", FileRole::Model),
            ("src/main/java/ru/egartech/swagger/model/Customer.java", FileRole::Model),
        ]
    );
}

#[test]
fn controller_signatures_and_status_codes() {
    let files = generate(GeneratorOptions::default());
    let controller = &file(&files, "OrderController.java").content;

    assert!(controller.starts_with("package ru.egartech.swagger.controller;\n"));
    assert!(controller.contains("import ru.egartech.swagger.service.OrderService;\n"));
    assert!(controller.contains("import ru.egartech.swagger.model.*;\n"));
    assert!(controller.contains("import org.springframework.format.annotation.DateTimeFormat;\n"));
    assert!(controller.contains("import java.util.List;\n"));
    assert!(controller.contains("import java.time.OffsetDateTime;\n"));
    assert!(controller.contains("/**\n * Order operations\n */\n@RestController\n@RequiredArgsConstructor\n"));

    assert!(controller.contains("    @GetMapping(\"/orders\")\n"));
    assert!(controller.contains(
        "    public ResponseEntity<List<Order>> listOrders(@DateTimeFormat(iso = DateTimeFormat.ISO.DATE_TIME) @RequestParam(value = \"since\", required = false) OffsetDateTime since) {\n"
    ));
    assert!(controller.contains("        return ResponseEntity.status(200).body(service.listOrders(since));\n"));
    assert!(controller.contains("     * Expects header X-Request-Id.\n"));

    assert!(controller.contains("    @DeleteMapping(\"/orders/{orderId}\")\n"));
    assert!(controller.contains(
        "    public ResponseEntity<Void> deleteOrder(@PathVariable(\"orderId\") Long orderId) {\n"
    ));
    assert!(controller.contains("        service.deleteOrder(orderId);\n        return ResponseEntity.status(204).build();\n"));

    let customers = &file(&files, "CustomerController.java").content;
    assert!(customers.contains("public ResponseEntity<Map<String, Customer>> customersByRegion() {"));
    assert!(customers.contains("import java.util.Map;\n"));
    assert!(!customers.contains("/**\n * \n"));
}

#[test]
fn service_interface() {
    let files = generate(GeneratorOptions::default());
    let service = &file(&files, "OrderService.java").content;

    assert!(service.starts_with("package ru.egartech.swagger.service;\n"));
    assert!(service.contains("public interface OrderService {"));
    assert!(service.contains("    List<Order> listOrders(OffsetDateTime since);\n"));
    assert!(service.contains("    Order getOrder(Long orderId);\n"));
    assert!(service.contains("    void deleteOrder(Long orderId);\n"));
    assert!(!service.contains("DateTimeFormat"));
}

#[test]
fn model_annotations() {
    let files = generate(GeneratorOptions::default());
    let order = &file(&files, "model/Order.java").content;

    assert!(order.contains("import com.fasterxml.jackson.annotation.JsonProperty;\n"));
    assert!(order.contains("import com.fasterxml.jackson.annotation.JsonValue;\n"));
    assert!(order.contains("@Data\n@Builder\n@NoArgsConstructor\n@AllArgsConstructor\npublic class Order {"));
    assert!(order.contains("     * Example: 42\n"));
    assert!(order.contains("    @JsonProperty(\"id\")\n    @NotNull\n    private Long id;\n"));
    assert!(order.contains(
        "    @JsonProperty(\"createdAt\")\n    @DateTimeFormat(iso = DateTimeFormat.ISO.DATE_TIME)\n    private OffsetDateTime createdAt;\n"
    ));
    // The literal "null" example was dropped
    assert!(!order.contains("Example: null"));
    assert!(order.contains("    private List<OrderLine> lines;\n"));

    let line = &file(&files, "model/OrderLine.java").content;
    assert!(line.contains("import java.util.Arrays;\n"));
}

#[test]
fn enum_model() {
    let files = generate(GeneratorOptions::default());
    let status = &file(&files, "model/OrderStatus.java").content;

    assert!(status.contains("public enum OrderStatus {"));
    assert!(status.contains("    NEW(\"NEW\"),\n    PAID(\"PAID\"),\n    SHIPPED(\"SHIPPED\");\n"));
    assert_eq!(
        status
            .matches("import com.fasterxml.jackson.annotation.JsonCreator;")
            .count(),
        1
    );
    assert!(status.contains("    @JsonCreator\n    public static OrderStatus fromValue(String value) {"));
}

#[test]
fn dto_suffix_flows_into_files_and_signatures() {
    let files = generate(GeneratorOptions {
        use_dto: true,
        ..GeneratorOptions::default()
    });

    let order = file(&files, "model/OrderDto.java");
    assert_eq!(order.role, FileRole::Model);
    assert!(order.content.contains("public class OrderDto {"));
    assert!(order.content.contains("    private List<OrderLineDto> lines;\n"));
    assert!(order.content.contains("    private OrderStatusDto status;\n"));

    let controller = &file(&files, "OrderController.java").content;
    assert!(controller.contains("public ResponseEntity<List<OrderDto>> listOrders("));
}

#[test]
fn without_lombok_or_validation() {
    let files = generate(GeneratorOptions {
        use_lombok: false,
        use_bean_validation: false,
        ..GeneratorOptions::default()
    });

    let order = &file(&files, "model/Order.java").content;
    assert!(!order.contains("lombok"));
    assert!(!order.contains("@NotNull"));
    assert!(order.contains("    public Long getId() {\n        return id;\n    }\n"));
    assert!(order.contains("    public void setCreatedAt(OffsetDateTime createdAt) {\n"));

    let controller = &file(&files, "OrderController.java").content;
    assert!(!controller.contains("javax.validation"));
    assert!(controller.contains("    public OrderController(OrderService service) {\n"));
}

#[test]
fn implicit_headers_documented_without_summary() {
    let mut ir = load::from_yaml(
        r#"
info:
  title: Ping
  version: "1"
operations:
  - operation_id: ping
    method: GET
    path: /ping
    tags:
      - name: health
    parameters:
      - name: X-Req
        location: header
        data_type: String
        vendor_extensions:
          x-implicit-header: true
"#,
    )
    .unwrap();
    let config = ScgConfig::default();
    post_process(
        &mut ir,
        &PipelineOptions {
            generator: config.options,
            group_by: config.group_by,
        },
    );
    let files = SpringServerGenerator.generate(&ir, &config).unwrap();
    let controller = &file(&files, "HealthController.java").content;

    assert!(controller.contains(
        "    /**\n     * Expects header X-Req.\n     */\n    @GetMapping(\"/ping\")\n"
    ));
    assert!(controller.contains("public ResponseEntity<Void> ping() {"));
}
